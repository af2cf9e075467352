mod hub_collection;
mod hub_item;

pub use hub_collection::{
    create_hub_handler, list_hubs_handler, CreateHubRequestDto, __path_create_hub_handler,
    __path_list_hubs_handler,
};
pub use hub_item::{
    delete_hub_handler, get_hub_handler, update_hub_handler, UpdateHubRequestDto,
    __path_delete_hub_handler, __path_get_hub_handler, __path_update_hub_handler,
};

use actix_web::HttpResponse;

use crate::auth::adapter::incoming::web::extractors::access_error_response;
use crate::hub::application::ports::incoming::use_cases::HubError;
use crate::shared::api::ApiResponse;

fn map_hub_error(err: HubError) -> HttpResponse {
    match err {
        HubError::Access(e) => access_error_response(&e),
        HubError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        HubError::NotFound => ApiResponse::not_found("HUB_NOT_FOUND", "Hub not found"),
        HubError::Forbidden => ApiResponse::forbidden("FORBIDDEN", "You do not own this hub"),
        HubError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Hub operation failed");
            ApiResponse::internal_error()
        }
    }
}
