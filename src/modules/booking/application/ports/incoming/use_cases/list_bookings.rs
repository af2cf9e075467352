use async_trait::async_trait;

use super::BookingError;
use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::BookingView;

/// The caller's own bookings with a bike summary, newest first
#[async_trait]
pub trait ListUserBookingsUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<Vec<BookingView>, BookingError>;
}

/// Bookings of the owner's bikes with bike and renter summaries, newest first
#[async_trait]
pub trait ListOwnerBookingsUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<Vec<BookingView>, BookingError>;
}
