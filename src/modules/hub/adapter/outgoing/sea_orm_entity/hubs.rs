use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::hub::application::domain::entities::{Hub, HubStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hubs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: i32,
    pub status: String,
    pub open_time: String,
    pub close_time: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(self) -> Hub {
        Hub {
            id: self.id,
            owner_id: UserId::from(self.owner_id),
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
            phone: self.phone,
            email: self.email,
            capacity: self.capacity,
            status: HubStatus::from_db(&self.status),
            open_time: self.open_time,
            close_time: self.close_time,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[cfg(feature = "no_db_triggers")]
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
