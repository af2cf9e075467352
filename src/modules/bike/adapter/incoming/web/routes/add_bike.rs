use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::map_bike_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::incoming::use_cases::{AddBikeCommand, AddBikeInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──── Request DTO ────

#[derive(Deserialize, ToSchema)]
pub struct AddBikeRequestDto {
    #[schema(example = "Royal Enfield")]
    pub brand: String,
    #[schema(example = "Classic 350")]
    pub model: String,
    /// Image URL
    pub image: String,
    #[schema(example = 2022)]
    pub year: i32,
    #[schema(example = "Cruiser")]
    pub category: String,
    #[schema(example = 2)]
    pub seating_capacity: i32,
    #[schema(example = "Petrol")]
    pub fuel_type: String,
    #[schema(example = "Manual")]
    pub transmission: String,
    #[schema(example = 1200)]
    pub price_per_day: i64,
    #[schema(example = 150)]
    pub price_per_hour: Option<i64>,
    #[schema(example = "Bengaluru")]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl From<AddBikeRequestDto> for AddBikeInput {
    fn from(dto: AddBikeRequestDto) -> Self {
        AddBikeInput {
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
    post,
    path = "/api/owner/bikes",
    tag = "owner",
    security(("bearer_auth" = [])),
    request_body = AddBikeRequestDto,
    responses(
        (status = 201, description = "Bike listed", body = inline(SuccessResponse<Bike>)),
        (status = 400, description = "Invalid listing", body = ErrorResponse),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[post("/api/owner/bikes")]
pub async fn add_bike_handler(
    user: AuthenticatedUser,
    req: web::Json<AddBikeRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match AddBikeCommand::new(user.user_id, req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.bike.add.execute(command).await {
        Ok(bike) => ApiResponse::created(bike),
        Err(e) => map_bike_error(e),
    }
}
