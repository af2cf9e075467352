use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::Booking;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookingQuery: Send + Sync {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingQueryError>;

    /// Non-cancelled bookings of the given bikes that end after `ends_after`.
    /// Callers still run the exact overlap test on the result.
    async fn list_live_for_bikes(
        &self,
        bike_ids: &[Uuid],
        ends_after: NaiveDateTime,
    ) -> Result<Vec<Booking>, BookingQueryError>;

    /// Newest first
    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError>;

    /// Newest first
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Booking>, BookingQueryError>;
}
