use actix_web::{get, web, Responder};

use super::map_user_management_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/owner/users",
    tag = "owner",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All live accounts", body = inline(SuccessResponse<Vec<User>>)),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[get("/api/owner/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.list_users.execute(user.user_id).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => map_user_management_error(e),
    }
}
