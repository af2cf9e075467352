use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::map_profile_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::use_cases::UpdateProfileImageCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateImageRequestDto {
    /// Publicly reachable image URL
    #[schema(example = "https://images.example.com/u/asha.png")]
    pub image: String,
}

#[utoipa::path(
    post,
    path = "/api/owner/update-image",
    tag = "owner",
    security(("bearer_auth" = [])),
    request_body = UpdateImageRequestDto,
    responses(
        (status = 200, description = "Profile image updated", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Missing image", body = ErrorResponse),
    )
)]
#[post("/api/owner/update-image")]
pub async fn update_image_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateImageRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateProfileImageCommand::new(req.into_inner().image) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.update_image.execute(user.user_id, command).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_profile_error(e),
    }
}
