use actix_web::{get, web, Responder};

use super::map_booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::BookingView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/bookings/user",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's bookings", body = inline(SuccessResponse<Vec<BookingView>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/bookings/user")]
pub async fn user_bookings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.list_for_user.execute(user.user_id).await {
        Ok(views) => ApiResponse::success(views),
        Err(e) => map_booking_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/bookings/owner",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings of the owner's bikes", body = inline(SuccessResponse<Vec<BookingView>>)),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[get("/api/bookings/owner")]
pub async fn owner_bookings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.booking.list_for_owner.execute(user.user_id).await {
        Ok(views) => ApiResponse::success(views),
        Err(e) => map_booking_error(e),
    }
}
