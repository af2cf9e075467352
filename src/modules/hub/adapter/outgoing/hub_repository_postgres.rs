use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::hubs::{ActiveModel as HubActiveModel, Entity as HubEntity};
use crate::hub::application::domain::entities::Hub;
use crate::hub::application::ports::outgoing::{CreateHubData, HubRepository, HubRepositoryError};

#[derive(Clone, Debug)]
pub struct HubRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HubRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_error(e: DbErr) -> HubRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => HubRepositoryError::NotFound,
        other => HubRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl HubRepository for HubRepositoryPostgres {
    async fn create_hub(&self, data: CreateHubData) -> Result<Hub, HubRepositoryError> {
        let active = HubActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(data.owner.value()),
            name: Set(data.name),
            address: Set(data.address),
            city: Set(data.city),
            state: Set(data.state),
            pincode: Set(data.pincode),
            phone: Set(data.phone),
            email: Set(data.email),
            capacity: Set(data.capacity),
            status: Set(data.status.as_str().to_string()),
            open_time: Set(data.open_time),
            close_time: Set(data.close_time),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active.insert(&*self.db).await.map_err(map_db_error)?;
        Ok(model.to_domain())
    }

    async fn save_hub(&self, hub: &Hub) -> Result<Hub, HubRepositoryError> {
        let active = HubActiveModel {
            id: Set(hub.id),
            owner_id: NotSet,
            name: Set(hub.name.clone()),
            address: Set(hub.address.clone()),
            city: Set(hub.city.clone()),
            state: Set(hub.state.clone()),
            pincode: Set(hub.pincode.clone()),
            phone: Set(hub.phone.clone()),
            email: Set(hub.email.clone()),
            capacity: Set(hub.capacity),
            status: Set(hub.status.as_str().to_string()),
            open_time: Set(hub.open_time.clone()),
            close_time: Set(hub.close_time.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active.update(&*self.db).await.map_err(map_db_error)?;
        Ok(model.to_domain())
    }

    async fn delete_hub(&self, hub_id: Uuid) -> Result<(), HubRepositoryError> {
        let result = HubEntity::delete_by_id(hub_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected == 0 {
            return Err(HubRepositoryError::NotFound);
        }
        Ok(())
    }
}
