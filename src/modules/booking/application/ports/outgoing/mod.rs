pub mod booking_query;
pub mod booking_repository;

pub use booking_query::{BookingQuery, BookingQueryError};
pub use booking_repository::{BookingRepository, BookingRepositoryError, NewBooking};
