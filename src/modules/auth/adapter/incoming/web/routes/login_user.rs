use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{AuthTokens, LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[schema(example = "RideFar2024")]
    pub password: String,
}

/// Exchange credentials for an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "user",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthTokens>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account blocked", body = ErrorResponse),
    )
)]
#[post("/api/user/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(tokens) => {
            info!(user_id = %tokens.user.id, "User logged in");
            ApiResponse::success(tokens)
        }
        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::UserBlocked) => {
            warn!("Login refused: account blocked");
            ApiResponse::forbidden("USER_BLOCKED", "User is blocked")
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
