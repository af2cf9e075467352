use async_trait::async_trait;

use super::BikeError;
use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::{
    require_text, validate_daily_price, validate_hourly_price, validate_seating, validate_year,
    Bike, BikeValidationError,
};
use crate::bike::application::ports::outgoing::CreateBikeData;

/// Raw listing fields as received from the client
#[derive(Debug, Clone)]
pub struct AddBikeInput {
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
}

/// Validated listing
#[derive(Debug, Clone)]
pub struct AddBikeCommand {
    data: CreateBikeData,
}

impl AddBikeCommand {
    pub fn new(owner: UserId, input: AddBikeInput) -> Result<Self, BikeValidationError> {
        let data = CreateBikeData {
            owner,
            brand: require_text("brand", input.brand)?,
            model: require_text("model", input.model)?,
            image: require_text("image", input.image)?,
            year: validate_year(input.year)?,
            category: require_text("category", input.category)?,
            seating_capacity: validate_seating(input.seating_capacity)?,
            fuel_type: require_text("fuel_type", input.fuel_type)?,
            transmission: require_text("transmission", input.transmission)?,
            price_per_day: validate_daily_price(input.price_per_day)?,
            price_per_hour: input.price_per_hour.map(validate_hourly_price).transpose()?,
            location: require_text("location", input.location)?,
            description: input.description.trim().to_string(),
        };

        Ok(Self { data })
    }

    pub fn owner(&self) -> UserId {
        self.data.owner
    }

    pub fn into_data(self) -> CreateBikeData {
        self.data
    }
}

#[async_trait]
pub trait AddBikeUseCase: Send + Sync {
    async fn execute(&self, command: AddBikeCommand) -> Result<Bike, BikeError>;
}
