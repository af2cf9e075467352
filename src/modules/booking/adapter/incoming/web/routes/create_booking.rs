use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{map_booking_error, WindowDto};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::booking::application::domain::{Booking, PaymentMethod};
use crate::booking::application::ports::incoming::use_cases::{
    CreateBookingCommand, CreateBookingInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateBookingRequestDto {
    pub bike_id: Uuid,
    #[serde(flatten)]
    pub window: WindowDto,
    /// Deposit collected at checkout, defaults to 0
    #[schema(example = 200)]
    pub paid_amount: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
}

impl From<CreateBookingRequestDto> for CreateBookingInput {
    fn from(dto: CreateBookingRequestDto) -> Self {
        CreateBookingInput {
            bike_id: dto.bike_id,
            pickup_date: dto.window.pickup_date,
            pickup_slot: dto.window.pickup_slot,
            return_date: dto.window.return_date,
            return_slot: dto.window.return_slot,
            paid_amount: dto.paid_amount,
            payment_method: dto.payment_method,
            hub_id: dto.hub_id,
            address: dto.address,
            phone: dto.phone,
            pickup_location: dto.pickup_location,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/bookings/create",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequestDto,
    responses(
        (status = 201, description = "Booking created", body = inline(SuccessResponse<Booking>)),
        (status = 400, description = "Invalid window or amount", body = ErrorResponse),
        (status = 404, description = "Unknown bike or hub", body = ErrorResponse),
        (status = 409, description = "Bike already booked or not listed", body = ErrorResponse),
    )
)]
#[post("/api/bookings/create")]
pub async fn create_booking_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBookingRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateBookingCommand::new(user.user_id, req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return map_booking_error(e),
    };

    match data.booking.create.execute(command).await {
        Ok(booking) => ApiResponse::created(booking),
        Err(e) => map_booking_error(e),
    }
}
