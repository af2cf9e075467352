use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::{Booking, BookingStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ChangeStatusRequestDto {
    pub booking_id: Uuid,
    pub status: BookingStatus,
}

#[utoipa::path(
    post,
    path = "/api/bookings/change-status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = ChangeStatusRequestDto,
    responses(
        (status = 200, description = "Booking after the transition", body = inline(SuccessResponse<Booking>)),
        (status = 403, description = "Not the owner of this booking", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Transition not allowed", body = ErrorResponse),
    )
)]
#[post("/api/bookings/change-status")]
pub async fn change_status_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangeStatusRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .booking
        .change_status
        .execute(user.user_id, req.booking_id, req.status)
        .await
    {
        Ok(booking) => ApiResponse::success(booking),
        Err(e) => map_booking_error(e),
    }
}
