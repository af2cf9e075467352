pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod user_management;
pub mod user_profile;

pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase};
pub use register_user::{
    AuthTokens, RegisterCommand, RegisterCommandError, RegisterError, RegisterUserUseCase,
};
pub use user_management::{
    DeleteUserUseCase, ListUsersUseCase, ToggleBlockUserUseCase, UserManagementError,
};
pub use user_profile::{
    BecomeOwnerUseCase, FetchProfileUseCase, ProfileError, UpdateProfileImageCommand,
    UpdateProfileImageError, UpdateProfileImageUseCase,
};
