use actix_web::{get, web, Responder};

use super::map_profile_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the authenticated caller
#[utoipa::path(
    get,
    path = "/api/user/data",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller profile", body = inline(SuccessResponse<User>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "User blocked", body = ErrorResponse),
    )
)]
#[get("/api/user/data")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_profile_error(e),
    }
}
