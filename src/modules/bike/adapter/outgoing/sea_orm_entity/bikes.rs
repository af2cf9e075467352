use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::Bike;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bikes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub year: i32,
    pub category: String,
    pub seating_capacity: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub price_per_day: i64,
    pub price_per_hour: Option<i64>,
    pub location: String,
    pub description: String,
    pub is_available: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    pub fn to_domain(self) -> Bike {
        Bike {
            id: self.id,
            owner_id: self.owner_id.map(UserId::from),
            brand: self.brand,
            model: self.model,
            image: self.image,
            year: self.year,
            category: self.category,
            seating_capacity: self.seating_capacity,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            price_per_day: self.price_per_day,
            price_per_hour: self.price_per_hour,
            location: self.location,
            description: self.description,
            is_available: self.is_available,
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
