use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MIN_BIKE_YEAR: i32 = 1900;
/// Upper bound for daily and hourly rates
pub const MAX_BIKE_PRICE: i64 = 10_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Bike {
    pub id: Uuid,
    /// `None` once the bike has been removed from the catalog
    pub owner_id: Option<UserId>,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub year: i32,
    pub category: String,
    pub seating_capacity: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub price_per_day: i64,
    pub price_per_hour: Option<i64>,
    pub location: String,
    pub description: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bike {
    /// A bike is bookable only while it is available and still owned
    pub fn is_listed(&self) -> bool {
        self.is_available && self.owner_id.is_some()
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == Some(user)
    }
}

/// Compact view embedded in booking listings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BikeSummary {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub location: String,
    pub price_per_day: i64,
}

impl From<&Bike> for BikeSummary {
    fn from(bike: &Bike) -> Self {
        Self {
            id: bike.id,
            brand: bike.brand.clone(),
            model: bike.model.clone(),
            image: bike.image.clone(),
            location: bike.location.clone(),
            price_per_day: bike.price_per_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BikeValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("Year must be between 1900 and {0}")]
    InvalidYear(i32),

    #[error("Seating capacity must be at least 1")]
    InvalidSeatingCapacity,

    #[error("Price per day must be between 1 and 10000000")]
    InvalidDailyPrice,

    #[error("Price per hour must be between 1 and 10000000")]
    InvalidHourlyPrice,
}

/// Latest model year accepted for a listing
pub fn max_bike_year() -> i32 {
    Utc::now().year() + 1
}

pub fn require_text(field: &'static str, value: String) -> Result<String, BikeValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BikeValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

pub fn validate_year(year: i32) -> Result<i32, BikeValidationError> {
    let max = max_bike_year();
    if !(MIN_BIKE_YEAR..=max).contains(&year) {
        return Err(BikeValidationError::InvalidYear(max));
    }
    Ok(year)
}

pub fn validate_seating(capacity: i32) -> Result<i32, BikeValidationError> {
    if capacity < 1 {
        return Err(BikeValidationError::InvalidSeatingCapacity);
    }
    Ok(capacity)
}

pub fn validate_daily_price(price: i64) -> Result<i64, BikeValidationError> {
    if !(1..=MAX_BIKE_PRICE).contains(&price) {
        return Err(BikeValidationError::InvalidDailyPrice);
    }
    Ok(price)
}

pub fn validate_hourly_price(price: i64) -> Result<i64, BikeValidationError> {
    if !(1..=MAX_BIKE_PRICE).contains(&price) {
        return Err(BikeValidationError::InvalidHourlyPrice);
    }
    Ok(price)
}
