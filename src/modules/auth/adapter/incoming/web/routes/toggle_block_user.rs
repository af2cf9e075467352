use actix_web::{patch, web, Responder};
use uuid::Uuid;

use super::map_user_management_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::{User, UserId};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Block an active account or unblock a blocked one
#[utoipa::path(
    patch,
    path = "/api/owner/users/{user_id}/block",
    tag = "owner",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "Target account")),
    responses(
        (status = 200, description = "Updated account", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Attempt to block yourself", body = ErrorResponse),
        (status = 404, description = "Unknown account", body = ErrorResponse),
    )
)]
#[patch("/api/owner/users/{user_id}/block")]
pub async fn toggle_block_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    match data.auth.toggle_block.execute(user.user_id, target).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_user_management_error(e),
    }
}
