use async_trait::async_trait;
use uuid::Uuid;

use super::BookingError;
use crate::bike::application::domain::entities::Bike;
use crate::booking::application::domain::BookingWindow;

/// `Ok(false)` when the bike is unlisted or another live booking overlaps
#[async_trait]
pub trait CheckBikeAvailabilityUseCase: Send + Sync {
    async fn execute(&self, bike_id: Uuid, window: BookingWindow) -> Result<bool, BookingError>;
}

/// Listed bikes at `location` that are free for the whole window
#[async_trait]
pub trait SearchAvailableBikesUseCase: Send + Sync {
    async fn execute(
        &self,
        location: String,
        window: BookingWindow,
    ) -> Result<Vec<Bike>, BookingError>;
}
