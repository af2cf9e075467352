use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    BecomeOwnerUseCase, DeleteUserUseCase, FetchProfileUseCase, ListUsersUseCase,
    LoginUserUseCase, RefreshTokenUseCase, RegisterUserUseCase, ToggleBlockUserUseCase,
    UpdateProfileImageUseCase,
};

/// Account and user-management use cases, as held in `AppState`
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase>,
    pub login: Arc<dyn LoginUserUseCase>,
    pub refresh: Arc<dyn RefreshTokenUseCase>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase>,
    pub become_owner: Arc<dyn BecomeOwnerUseCase>,
    pub update_image: Arc<dyn UpdateProfileImageUseCase>,
    pub list_users: Arc<dyn ListUsersUseCase>,
    pub toggle_block: Arc<dyn ToggleBlockUserUseCase>,
    pub delete_user: Arc<dyn DeleteUserUseCase>,
}
