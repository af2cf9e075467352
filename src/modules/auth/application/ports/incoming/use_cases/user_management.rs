use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::helpers::AccessError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserManagementError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Target user not found")]
    TargetNotFound,

    #[error("Owners cannot apply this action to themselves")]
    SelfAction,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<Vec<User>, UserManagementError>;
}

/// Flips the target's blocked flag and returns the updated account
#[async_trait]
pub trait ToggleBlockUserUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, target: UserId) -> Result<User, UserManagementError>;
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, target: UserId) -> Result<(), UserManagementError>;
}
