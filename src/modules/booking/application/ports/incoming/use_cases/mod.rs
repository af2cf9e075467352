pub mod availability;
pub mod booking_error;
pub mod change_status;
pub mod create_booking;
pub mod list_bookings;
pub mod pay_remaining;

pub use availability::{CheckBikeAvailabilityUseCase, SearchAvailableBikesUseCase};
pub use booking_error::BookingError;
pub use change_status::ChangeBookingStatusUseCase;
pub use create_booking::{CreateBookingCommand, CreateBookingInput, CreateBookingUseCase};
pub use list_bookings::{ListOwnerBookingsUseCase, ListUserBookingsUseCase};
pub use pay_remaining::{PayRemainingCommand, PayRemainingUseCase};
