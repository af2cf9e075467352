use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
    async fn set_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError>;
    async fn set_image(&self, user_id: Uuid, image: String) -> Result<User, UserRepositoryError>;
    async fn set_blocked(&self, user_id: Uuid, blocked: bool)
        -> Result<User, UserRepositoryError>;
    async fn soft_delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
