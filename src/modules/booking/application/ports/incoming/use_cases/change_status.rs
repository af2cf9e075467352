use async_trait::async_trait;
use uuid::Uuid;

use super::BookingError;
use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{Booking, BookingStatus};

#[async_trait]
pub trait ChangeBookingStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingError>;
}
