use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/api/user/refresh",
    tag = "user",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponse>)),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse),
    )
)]
#[post("/api/user/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(&req.refresh_token).await {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponse { access_token }),
        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }
        Err(RefreshTokenError::TokenGenerationFailed(msg)) => {
            tracing::error!(error = %msg, "Access token generation failed");
            ApiResponse::internal_error()
        }
    }
}
