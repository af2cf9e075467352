mod add_bike;
mod delete_bike;
mod get_bike;
mod list_bikes;
mod owner_bikes;
mod toggle_bike;
mod update_bike;

pub use add_bike::{add_bike_handler, AddBikeRequestDto, __path_add_bike_handler};
pub use delete_bike::{delete_bike_handler, __path_delete_bike_handler};
pub use get_bike::{get_bike_handler, __path_get_bike_handler};
pub use list_bikes::{list_bikes_handler, __path_list_bikes_handler};
pub use owner_bikes::{owner_bikes_handler, __path_owner_bikes_handler};
pub use toggle_bike::{toggle_bike_handler, __path_toggle_bike_handler};
pub use update_bike::{update_bike_handler, UpdateBikeRequestDto, __path_update_bike_handler};

use actix_web::HttpResponse;

use crate::auth::adapter::incoming::web::extractors::access_error_response;
use crate::bike::application::ports::incoming::use_cases::BikeError;
use crate::shared::api::ApiResponse;

fn map_bike_error(err: BikeError) -> HttpResponse {
    match err {
        BikeError::Access(e) => access_error_response(&e),
        BikeError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        BikeError::NotFound => ApiResponse::not_found("BIKE_NOT_FOUND", "Bike not found"),
        BikeError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You do not own this bike")
        }
        BikeError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Bike operation failed");
            ApiResponse::internal_error()
        }
    }
}
