use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::hub::application::domain::entities::Hub;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HubQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait HubQuery: Send + Sync {
    async fn find_by_id(&self, hub_id: Uuid) -> Result<Option<Hub>, HubQueryError>;

    /// Newest first
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Hub>, HubQueryError>;
}
