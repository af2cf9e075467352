use actix_web::{delete, get, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_hub_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hub::application::domain::entities::{Hub, HubStatus};
use crate::hub::application::ports::incoming::use_cases::{UpdateHubCommand, UpdateHubInput};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Partial update; `phone`/`email` accept `null` to clear them
#[derive(Deserialize, ToSchema)]
pub struct UpdateHubRequestDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    pub capacity: Option<i32>,
    pub status: Option<HubStatus>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl From<UpdateHubRequestDto> for UpdateHubInput {
    fn from(dto: UpdateHubRequestDto) -> Self {
        UpdateHubInput {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            pincode: dto.pincode,
            phone: dto.phone,
            email: dto.email,
            capacity: dto.capacity,
            status: dto.status,
            open_time: dto.open_time,
            close_time: dto.close_time,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/hubs/{hub_id}",
    tag = "hubs",
    security(("bearer_auth" = [])),
    params(("hub_id" = Uuid, Path, description = "Hub id")),
    responses(
        (status = 200, description = "Hub", body = inline(SuccessResponse<Hub>)),
        (status = 404, description = "Unknown or foreign hub", body = ErrorResponse),
    )
)]
#[get("/api/hubs/{hub_id}")]
pub async fn get_hub_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hub.get.execute(user.user_id, path.into_inner()).await {
        Ok(hub) => ApiResponse::success(hub),
        Err(e) => map_hub_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/hubs/{hub_id}",
    tag = "hubs",
    security(("bearer_auth" = [])),
    params(("hub_id" = Uuid, Path, description = "Hub id")),
    request_body = UpdateHubRequestDto,
    responses(
        (status = 200, description = "Updated hub", body = inline(SuccessResponse<Hub>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 403, description = "Hub of another owner", body = ErrorResponse),
        (status = 404, description = "Unknown hub", body = ErrorResponse),
    )
)]
#[put("/api/hubs/{hub_id}")]
pub async fn update_hub_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateHubRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateHubCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .hub
        .update
        .execute(user.user_id, path.into_inner(), command)
        .await
    {
        Ok(hub) => ApiResponse::success(hub),
        Err(e) => map_hub_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/hubs/{hub_id}",
    tag = "hubs",
    security(("bearer_auth" = [])),
    params(("hub_id" = Uuid, Path, description = "Hub id")),
    responses(
        (status = 204, description = "Hub deleted"),
        (status = 403, description = "Hub of another owner", body = ErrorResponse),
        (status = 404, description = "Unknown hub", body = ErrorResponse),
    )
)]
#[delete("/api/hubs/{hub_id}")]
pub async fn delete_hub_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hub.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_hub_error(e),
    }
}
