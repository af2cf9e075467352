use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::hubs::{Column, Entity as HubEntity};
use crate::auth::application::domain::entities::UserId;
use crate::hub::application::domain::entities::Hub;
use crate::hub::application::ports::outgoing::{HubQuery, HubQueryError};

#[derive(Clone, Debug)]
pub struct HubQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HubQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HubQuery for HubQueryPostgres {
    async fn find_by_id(&self, hub_id: Uuid) -> Result<Option<Hub>, HubQueryError> {
        let hub = HubEntity::find_by_id(hub_id)
            .one(&*self.db)
            .await
            .map_err(|e| HubQueryError::DatabaseError(e.to_string()))?;

        Ok(hub.map(|m| m.to_domain()))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Hub>, HubQueryError> {
        let hubs = HubEntity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| HubQueryError::DatabaseError(e.to_string()))?;

        Ok(hubs.into_iter().map(|m| m.to_domain()).collect())
    }
}
