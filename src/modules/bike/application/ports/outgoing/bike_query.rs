use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::Bike;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BikeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BikeQuery: Send + Sync {
    async fn find_by_id(&self, bike_id: Uuid) -> Result<Option<Bike>, BikeQueryError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Bike>, BikeQueryError>;

    /// Available bikes that still have an owner, newest first
    async fn list_listed(&self) -> Result<Vec<Bike>, BikeQueryError>;
    async fn list_listed_by_location(&self, location: &str) -> Result<Vec<Bike>, BikeQueryError>;

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Bike>, BikeQueryError>;
    async fn count_by_owner(&self, owner: UserId) -> Result<u64, BikeQueryError>;
}
