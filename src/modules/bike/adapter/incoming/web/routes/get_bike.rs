use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::map_bike_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::bike::application::domain::entities::Bike;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/bikes/{bike_id}",
    tag = "bikes",
    params(("bike_id" = Uuid, Path, description = "Bike id")),
    responses(
        (status = 200, description = "Bike details", body = inline(SuccessResponse<Bike>)),
        (status = 404, description = "Unknown bike", body = ErrorResponse),
    )
)]
#[get("/api/bikes/{bike_id}")]
pub async fn get_bike_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    match data.bike.get.execute(path.into_inner()).await {
        Ok(bike) => ApiResponse::success(bike),
        Err(e) => map_bike_error(e),
    }
}
