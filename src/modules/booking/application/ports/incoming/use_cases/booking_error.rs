use crate::auth::application::helpers::AccessError;
use crate::booking::application::domain::{LedgerError, TransitionError, WindowError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Bike not found")]
    BikeNotFound,

    #[error("Bike is not listed for rent")]
    BikeNotListed,

    #[error("Bike is already booked for the requested window")]
    BikeUnavailable,

    #[error("Hub not found")]
    HubNotFound,

    #[error("Hub is not active")]
    HubInactive,

    #[error("Booking not found")]
    NotFound,

    #[error("Booking belongs to someone else")]
    Forbidden,

    #[error("Booking is cancelled")]
    Cancelled,

    #[error("Payment {0} has already been recorded")]
    DuplicatePayment(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
