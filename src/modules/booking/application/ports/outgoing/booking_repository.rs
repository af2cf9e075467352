use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{
    Booking, BookingStatus, BookingWindow, PaymentLedger, PaymentMethod,
};

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub bike_id: Uuid,
    pub user_id: UserId,
    pub owner_id: UserId,
    pub window: BookingWindow,
    pub total_hours: i32,
    pub ledger: PaymentLedger,
    pub payment_method: PaymentMethod,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingRepositoryError {
    #[error("Booking not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(&self, data: NewBooking) -> Result<Booking, BookingRepositoryError>;

    /// Writes the new status together with the (possibly refunded) ledger
    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        ledger: PaymentLedger,
    ) -> Result<Booking, BookingRepositoryError>;

    /// Stores a top-up; the payment method becomes `online`.
    ///
    /// Only the latest gateway payment id is kept, so it guards against an
    /// immediate replay of the last top-up, not against replaying an older one.
    async fn record_payment(
        &self,
        booking_id: Uuid,
        ledger: PaymentLedger,
        gateway_payment_id: Option<String>,
    ) -> Result<Booking, BookingRepositoryError>;
}
