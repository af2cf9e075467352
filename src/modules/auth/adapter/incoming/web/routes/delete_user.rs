use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_user_management_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete an account
#[utoipa::path(
    delete,
    path = "/api/owner/users/{user_id}",
    tag = "owner",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "Target account")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Unknown account", body = ErrorResponse),
    )
)]
#[delete("/api/owner/users/{user_id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    match data.auth.delete_user.execute(user.user_id, target).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_user_management_error(e),
    }
}
