use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::shared::api::ApiResponse;

/// Caller identity taken from a valid access token.
///
/// Only proves the token is genuine; role and blocked checks happen in the
/// use cases through `RoleGuard`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider missing from app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
            })),
            Ok(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Shared mapping for role/ownership guard failures
pub fn access_error_response(err: &AccessError) -> HttpResponse {
    match err {
        AccessError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        AccessError::Blocked => ApiResponse::forbidden("USER_BLOCKED", "User is blocked"),
        AccessError::NotOwner => ApiResponse::forbidden("FORBIDDEN", "Owner role required"),
        AccessError::QueryFailed(msg) => {
            tracing::error!(error = %msg, "Failed to resolve caller");
            ApiResponse::internal_error()
        }
    }
}
