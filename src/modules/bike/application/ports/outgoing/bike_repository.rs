use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::Bike;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateBikeData {
    pub owner: UserId,
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

/// Partial update. `None` keeps the stored value; `price_per_hour` may be
/// cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct BikePatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub seating_capacity: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub price_per_day: Option<i64>,
    pub price_per_hour: PatchField<i64>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl BikePatch {
    /// Applies the patch to an in-memory bike
    pub fn apply(self, bike: &mut Bike) {
        if let Some(v) = self.brand {
            bike.brand = v;
        }
        if let Some(v) = self.model {
            bike.model = v;
        }
        if let Some(v) = self.image {
            bike.image = v;
        }
        if let Some(v) = self.year {
            bike.year = v;
        }
        if let Some(v) = self.category {
            bike.category = v;
        }
        if let Some(v) = self.seating_capacity {
            bike.seating_capacity = v;
        }
        if let Some(v) = self.fuel_type {
            bike.fuel_type = v;
        }
        if let Some(v) = self.transmission {
            bike.transmission = v;
        }
        if let Some(v) = self.price_per_day {
            bike.price_per_day = v;
        }
        bike.price_per_hour = self.price_per_hour.apply_to(bike.price_per_hour);
        if let Some(v) = self.location {
            bike.location = v;
        }
        if let Some(v) = self.description {
            bike.description = v;
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BikeRepositoryError {
    #[error("Bike not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BikeRepository: Send + Sync {
    async fn create_bike(&self, data: CreateBikeData) -> Result<Bike, BikeRepositoryError>;
    async fn update_bike(&self, bike_id: Uuid, patch: BikePatch)
        -> Result<Bike, BikeRepositoryError>;
    async fn set_availability(
        &self,
        bike_id: Uuid,
        available: bool,
    ) -> Result<Bike, BikeRepositoryError>;
    /// Removes the bike from the catalog while keeping it for booking history
    async fn detach_owner(&self, bike_id: Uuid) -> Result<(), BikeRepositoryError>;
}
