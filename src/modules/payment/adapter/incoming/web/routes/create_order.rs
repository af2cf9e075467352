use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{access_error_response, AuthenticatedUser};
use crate::payment::application::domain::PaymentOrder;
use crate::payment::application::ports::incoming::use_cases::PaymentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateOrderRequestDto {
    /// Whole currency units
    #[schema(example = 500)]
    pub amount: i64,
}

#[utoipa::path(
    post,
    path = "/api/payment/create-order",
    tag = "payment",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequestDto,
    responses(
        (status = 200, description = "Gateway order created", body = inline(SuccessResponse<PaymentOrder>)),
        (status = 400, description = "Amount below minimum", body = ErrorResponse),
        (status = 502, description = "Payment gateway failed", body = ErrorResponse),
    )
)]
#[post("/api/payment/create-order")]
pub async fn create_order_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateOrderRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.payment.create_order.execute(user.user_id, req.amount).await {
        Ok(order) => ApiResponse::success(order),
        Err(PaymentError::Access(e)) => access_error_response(&e),
        Err(e @ PaymentError::InvalidAmount { .. }) => {
            ApiResponse::bad_request("INVALID_AMOUNT", &e.to_string())
        }
        Err(PaymentError::Gateway(_)) => {
            ApiResponse::bad_gateway("PAYMENT_GATEWAY_ERROR", "Could not create payment order")
        }
    }
}
