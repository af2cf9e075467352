mod availability;
mod change_status;
mod create_booking;
mod list_bookings;
mod pay_remaining;

pub use availability::{
    check_availability_handler, check_bike_handler, BikeAvailabilityResponse,
    CheckAvailabilityRequestDto, CheckBikeRequestDto, __path_check_availability_handler,
    __path_check_bike_handler,
};
pub use change_status::{change_status_handler, ChangeStatusRequestDto, __path_change_status_handler};
pub use create_booking::{create_booking_handler, CreateBookingRequestDto, __path_create_booking_handler};
pub use list_bookings::{
    owner_bookings_handler, user_bookings_handler, __path_owner_bookings_handler,
    __path_user_bookings_handler,
};
pub use pay_remaining::{pay_remaining_handler, PayRemainingRequestDto, __path_pay_remaining_handler};

use actix_web::HttpResponse;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::access_error_response;
use crate::booking::application::domain::{BookingWindow, LedgerError, WindowError};
use crate::booking::application::ports::incoming::use_cases::BookingError;
use crate::shared::api::ApiResponse;

/// Pickup/return pair shared by the availability and checkout bodies
#[derive(Deserialize, ToSchema, Clone)]
pub struct WindowDto {
    #[schema(example = "2025-08-01")]
    pub pickup_date: NaiveDate,
    #[schema(example = "10:00")]
    pub pickup_slot: String,
    #[schema(example = "2025-08-02")]
    pub return_date: NaiveDate,
    #[schema(example = "10:00")]
    pub return_slot: String,
}

impl WindowDto {
    fn to_window(&self) -> Result<BookingWindow, WindowError> {
        BookingWindow::new(
            self.pickup_date,
            &self.pickup_slot,
            self.return_date,
            &self.return_slot,
        )
    }
}

fn map_booking_error(err: BookingError) -> HttpResponse {
    match err {
        BookingError::Access(e) => access_error_response(&e),
        BookingError::Window(WindowError::PriceOverflow) => ApiResponse::bad_request(
            "PRICE_OUT_OF_RANGE",
            "Rental price for this window is out of range",
        ),
        BookingError::Window(e) => {
            ApiResponse::bad_request("INVALID_BOOKING_WINDOW", &e.to_string())
        }
        BookingError::Ledger(LedgerError::Refunded) => {
            ApiResponse::conflict("BOOKING_REFUNDED", "Booking has been refunded")
        }
        BookingError::Ledger(e) => ApiResponse::bad_request("INVALID_PAYMENT_AMOUNT", &e.to_string()),
        BookingError::Transition(e) => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &e.to_string())
        }
        BookingError::BikeNotFound => ApiResponse::not_found("BIKE_NOT_FOUND", "Bike not found"),
        BookingError::BikeNotListed => {
            ApiResponse::conflict("BIKE_NOT_LISTED", "Bike is not listed for rent")
        }
        BookingError::BikeUnavailable => ApiResponse::conflict(
            "BIKE_NOT_AVAILABLE",
            "Bike is already booked for the requested window",
        ),
        BookingError::HubNotFound => ApiResponse::not_found("HUB_NOT_FOUND", "Hub not found"),
        BookingError::HubInactive => ApiResponse::conflict("HUB_INACTIVE", "Hub is not active"),
        BookingError::NotFound => ApiResponse::not_found("BOOKING_NOT_FOUND", "Booking not found"),
        BookingError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You are not allowed to act on this booking")
        }
        BookingError::Cancelled => {
            ApiResponse::conflict("BOOKING_CANCELLED", "Booking is cancelled")
        }
        BookingError::DuplicatePayment(id) => ApiResponse::conflict(
            "DUPLICATE_PAYMENT",
            &format!("Payment {id} has already been recorded"),
        ),
        BookingError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Booking operation failed");
            ApiResponse::internal_error()
        }
    }
}
