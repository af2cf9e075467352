use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_bike_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::incoming::use_cases::{UpdateBikeCommand, UpdateBikeInput};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Partial update. Omitted fields are left alone; `price_per_hour: null` clears the hourly rate.
#[derive(Deserialize, ToSchema)]
pub struct UpdateBikeRequestDto {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub seating_capacity: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub price_per_day: Option<i64>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub price_per_hour: PatchField<i64>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateBikeRequestDto> for UpdateBikeInput {
    fn from(dto: UpdateBikeRequestDto) -> Self {
        UpdateBikeInput {
            brand: dto.brand,
            model: dto.model,
            image: dto.image,
            year: dto.year,
            category: dto.category,
            seating_capacity: dto.seating_capacity,
            fuel_type: dto.fuel_type,
            transmission: dto.transmission,
            price_per_day: dto.price_per_day,
            price_per_hour: dto.price_per_hour,
            location: dto.location,
            description: dto.description,
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/owner/bikes/{bike_id}",
    tag = "owner",
    security(("bearer_auth" = [])),
    params(("bike_id" = Uuid, Path, description = "Bike id")),
    request_body = UpdateBikeRequestDto,
    responses(
        (status = 200, description = "Updated bike", body = inline(SuccessResponse<Bike>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 403, description = "Not the bike's owner", body = ErrorResponse),
        (status = 404, description = "Unknown bike", body = ErrorResponse),
    )
)]
#[put("/api/owner/bikes/{bike_id}")]
pub async fn update_bike_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBikeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateBikeCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .bike
        .update
        .execute(user.user_id, path.into_inner(), command)
        .await
    {
        Ok(bike) => ApiResponse::success(bike),
        Err(e) => map_bike_error(e),
    }
}
