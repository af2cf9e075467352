pub mod availability_service;
pub mod change_status_service;
pub mod create_booking_service;
pub mod list_bookings_service;
pub mod pay_remaining_service;

pub use availability_service::{CheckBikeAvailabilityService, SearchAvailableBikesService};
pub use change_status_service::ChangeBookingStatusService;
pub use create_booking_service::CreateBookingService;
pub use list_bookings_service::{ListOwnerBookingsService, ListUserBookingsService};
pub use pay_remaining_service::PayRemainingService;
