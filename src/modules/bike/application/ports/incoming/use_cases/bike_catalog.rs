use async_trait::async_trait;
use uuid::Uuid;

use super::BikeError;
use crate::bike::application::domain::entities::Bike;

/// Public catalog: listed bikes only
#[async_trait]
pub trait ListBikesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Bike>, BikeError>;
}

#[async_trait]
pub trait GetBikeUseCase: Send + Sync {
    async fn execute(&self, bike_id: Uuid) -> Result<Bike, BikeError>;
}
