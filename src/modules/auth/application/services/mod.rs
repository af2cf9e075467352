pub mod login_user_service;
pub mod refresh_token_service;
pub mod register_user_service;
pub mod user_management_service;
pub mod user_profile_service;

pub use login_user_service::LoginUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use user_management_service::{DeleteUserService, ListUsersService, ToggleBlockUserService};
pub use user_profile_service::{BecomeOwnerService, FetchProfileService, UpdateProfileImageService};
