use actix_web::{get, web, Responder};

use super::map_bike_error;
use crate::api::schemas::SuccessResponse;
use crate::bike::application::domain::entities::Bike;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public catalog of bookable bikes
#[utoipa::path(
    get,
    path = "/api/user/bikes",
    tag = "bikes",
    responses((status = 200, description = "Listed bikes", body = inline(SuccessResponse<Vec<Bike>>)))
)]
#[get("/api/user/bikes")]
pub async fn list_bikes_handler(data: web::Data<AppState>) -> impl Responder {
    match data.bike.list.execute().await {
        Ok(bikes) => ApiResponse::success(bikes),
        Err(e) => map_bike_error(e),
    }
}
