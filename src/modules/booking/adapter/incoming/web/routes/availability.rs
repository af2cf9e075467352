use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{map_booking_error, WindowDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::bike::application::domain::entities::Bike;
use crate::booking::application::ports::incoming::use_cases::BookingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CheckAvailabilityRequestDto {
    #[schema(example = "Bengaluru")]
    pub location: String,
    #[serde(flatten)]
    pub window: WindowDto,
}

#[derive(Deserialize, ToSchema)]
pub struct CheckBikeRequestDto {
    pub bike_id: Uuid,
    #[serde(flatten)]
    pub window: WindowDto,
}

#[derive(Serialize, ToSchema)]
pub struct BikeAvailabilityResponse {
    pub bike_id: Uuid,
    pub available: bool,
}

/// Bikes at a location that are free for the whole window
#[utoipa::path(
    post,
    path = "/api/bookings/check-availability",
    tag = "bookings",
    request_body = CheckAvailabilityRequestDto,
    responses(
        (status = 200, description = "Available bikes", body = inline(SuccessResponse<Vec<Bike>>)),
        (status = 400, description = "Invalid window", body = ErrorResponse),
    )
)]
#[post("/api/bookings/check-availability")]
pub async fn check_availability_handler(
    req: web::Json<CheckAvailabilityRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let window = match req.window.to_window() {
        Ok(w) => w,
        Err(e) => return map_booking_error(BookingError::Window(e)),
    };
    let location = req.into_inner().location.trim().to_string();
    if location.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "location is required");
    }

    match data.booking.search_available.execute(location, window).await {
        Ok(bikes) => ApiResponse::success(bikes),
        Err(e) => map_booking_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/bookings/check-bike",
    tag = "bookings",
    request_body = CheckBikeRequestDto,
    responses(
        (status = 200, description = "Availability of one bike", body = inline(SuccessResponse<BikeAvailabilityResponse>)),
        (status = 400, description = "Invalid window", body = ErrorResponse),
        (status = 404, description = "Unknown bike", body = ErrorResponse),
    )
)]
#[post("/api/bookings/check-bike")]
pub async fn check_bike_handler(
    req: web::Json<CheckBikeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let window = match req.window.to_window() {
        Ok(w) => w,
        Err(e) => return map_booking_error(BookingError::Window(e)),
    };

    match data.booking.check_bike.execute(req.bike_id, window).await {
        Ok(available) => ApiResponse::success(BikeAvailabilityResponse {
            bike_id: req.bike_id,
            available,
        }),
        Err(e) => map_booking_error(e),
    }
}
