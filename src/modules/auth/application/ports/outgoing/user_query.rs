// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId, UserRole};

/// Result DTO for user queries.
/// Carries the password hash, so it must never be serialized as-is.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_blocked: bool,
    pub image: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn to_user(&self) -> User {
        User {
            id: UserId::from(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            is_blocked: self.is_blocked,
            image: self.image.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<UserQueryResult>, UserQueryError>;
    /// Live (non-deleted) accounts, newest first
    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError>;
}
