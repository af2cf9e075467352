mod change_role;
mod delete_user;
mod fetch_profile;
mod list_users;
mod login_user;
mod refresh_token;
mod register_user;
mod toggle_block_user;
mod update_image;

pub use change_role::change_role_handler;
pub use delete_user::delete_user_handler;
pub use fetch_profile::fetch_profile_handler;
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
pub use toggle_block_user::toggle_block_user_handler;
pub use update_image::update_image_handler;

pub use fetch_profile::__path_fetch_profile_handler;
pub use change_role::__path_change_role_handler;
pub use delete_user::__path_delete_user_handler;
pub use list_users::__path_list_users_handler;
pub use login_user::__path_login_user_handler;
pub use refresh_token::__path_refresh_token_handler;
pub use register_user::__path_register_user_handler;
pub use toggle_block_user::__path_toggle_block_user_handler;
pub use update_image::__path_update_image_handler;

use crate::auth::adapter::incoming::web::extractors::access_error_response;
use crate::auth::application::ports::incoming::use_cases::{ProfileError, UserManagementError};
use crate::shared::api::ApiResponse;
use actix_web::HttpResponse;

fn map_profile_error(err: ProfileError) -> HttpResponse {
    match err {
        ProfileError::Access(e) => access_error_response(&e),
        ProfileError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

fn map_user_management_error(err: UserManagementError) -> HttpResponse {
    match err {
        UserManagementError::Access(e) => access_error_response(&e),
        UserManagementError::TargetNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UserManagementError::SelfAction => ApiResponse::bad_request(
            "SELF_ACTION_NOT_ALLOWED",
            "You cannot apply this action to your own account",
        ),
        UserManagementError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "User management failed");
            ApiResponse::internal_error()
        }
    }
}
