use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::hub::application::domain::entities::{Hub, HubStatus};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateHubData {
    pub owner: UserId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: i32,
    pub status: HubStatus,
    pub open_time: String,
    pub close_time: String,
}

/// Partial update; `None`/`Unset` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct HubPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub phone: PatchField<String>,
    pub email: PatchField<String>,
    pub capacity: Option<i32>,
    pub status: Option<HubStatus>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

impl HubPatch {
    pub fn apply(self, hub: &mut Hub) {
        if let Some(v) = self.name {
            hub.name = v;
        }
        if let Some(v) = self.address {
            hub.address = v;
        }
        if let Some(v) = self.city {
            hub.city = v;
        }
        if let Some(v) = self.state {
            hub.state = v;
        }
        if let Some(v) = self.pincode {
            hub.pincode = v;
        }
        hub.phone = self.phone.apply_to(hub.phone.take());
        hub.email = self.email.apply_to(hub.email.take());
        if let Some(v) = self.capacity {
            hub.capacity = v;
        }
        if let Some(v) = self.status {
            hub.status = v;
        }
        if let Some(v) = self.open_time {
            hub.open_time = v;
        }
        if let Some(v) = self.close_time {
            hub.close_time = v;
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HubRepositoryError {
    #[error("Hub not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait HubRepository: Send + Sync {
    async fn create_hub(&self, data: CreateHubData) -> Result<Hub, HubRepositoryError>;

    /// Persists an already merged and validated hub
    async fn save_hub(&self, hub: &Hub) -> Result<Hub, HubRepositoryError>;

    async fn delete_hub(&self, hub_id: Uuid) -> Result<(), HubRepositoryError>;
}
