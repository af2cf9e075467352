use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::map_bike_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::bike::application::domain::entities::Bike;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/owner/bikes/{bike_id}/toggle",
    tag = "owner",
    security(("bearer_auth" = [])),
    params(("bike_id" = Uuid, Path, description = "Bike id")),
    responses(
        (status = 200, description = "Availability flipped", body = inline(SuccessResponse<Bike>)),
        (status = 403, description = "Not the bike's owner", body = ErrorResponse),
        (status = 404, description = "Unknown bike", body = ErrorResponse),
    )
)]
#[post("/api/owner/bikes/{bike_id}/toggle")]
pub async fn toggle_bike_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .bike
        .toggle_availability
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(bike) => ApiResponse::success(bike),
        Err(e) => map_bike_error(e),
    }
}
