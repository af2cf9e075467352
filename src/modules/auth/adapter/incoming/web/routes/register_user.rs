use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, RegisterCommand, RegisterError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──── Request DTO ────

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "Asha Rao")]
    pub name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[schema(example = "RideFar2024")]
    pub password: String,
}

/// Create an account and return a token pair
#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = "user",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthTokens>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/user/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterCommand::new(dto.name, dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(command).await {
        Ok(tokens) => ApiResponse::created(tokens),
        Err(RegisterError::UserAlreadyExists) => {
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Email is already registered")
        }
        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
