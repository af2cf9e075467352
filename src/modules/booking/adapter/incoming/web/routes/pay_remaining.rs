use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_booking_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::Booking;
use crate::booking::application::ports::incoming::use_cases::PayRemainingCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct PayRemainingRequestDto {
    pub booking_id: Uuid,
    #[schema(example = 150)]
    pub amount: i64,
    /// Payment id returned by the gateway, used to reject replays
    pub gateway_payment_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/bookings/pay-remaining",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = PayRemainingRequestDto,
    responses(
        (status = 200, description = "Payment recorded", body = inline(SuccessResponse<Booking>)),
        (status = 400, description = "Amount is zero, negative or above the balance", body = ErrorResponse),
        (status = 403, description = "Booking belongs to another user", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 409, description = "Booking cancelled or payment already recorded", body = ErrorResponse),
    )
)]
#[post("/api/bookings/pay-remaining")]
pub async fn pay_remaining_handler(
    user: AuthenticatedUser,
    req: web::Json<PayRemainingRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match PayRemainingCommand::new(req.booking_id, req.amount, req.gateway_payment_id)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_booking_error(e.into()),
    };

    match data.booking.pay_remaining.execute(user.user_id, command).await {
        Ok(booking) => ApiResponse::success(booking),
        Err(e) => map_booking_error(e),
    }
}
