use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::bikes::{Column, Entity as BikeEntity};
use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::outgoing::{BikeQuery, BikeQueryError};

#[derive(Clone, Debug)]
pub struct BikeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BikeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn listed() -> Select<BikeEntity> {
        BikeEntity::find()
            .filter(Column::IsAvailable.eq(true))
            .filter(Column::OwnerId.is_not_null())
            .order_by_desc(Column::CreatedAt)
    }

    async fn fetch(&self, select: Select<BikeEntity>) -> Result<Vec<Bike>, BikeQueryError> {
        let models = select
            .all(&*self.db)
            .await
            .map_err(|e| BikeQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }
}

#[async_trait]
impl BikeQuery for BikeQueryPostgres {
    async fn find_by_id(&self, bike_id: Uuid) -> Result<Option<Bike>, BikeQueryError> {
        let bike = BikeEntity::find_by_id(bike_id)
            .one(&*self.db)
            .await
            .map_err(|e| BikeQueryError::DatabaseError(e.to_string()))?;

        Ok(bike.map(|m| m.to_domain()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Bike>, BikeQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(BikeEntity::find().filter(Column::Id.is_in(ids.to_vec())))
            .await
    }

    async fn list_listed(&self) -> Result<Vec<Bike>, BikeQueryError> {
        self.fetch(Self::listed()).await
    }

    async fn list_listed_by_location(&self, location: &str) -> Result<Vec<Bike>, BikeQueryError> {
        self.fetch(Self::listed().filter(Column::Location.eq(location.trim())))
            .await
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Bike>, BikeQueryError> {
        self.fetch(
            BikeEntity::find()
                .filter(Column::OwnerId.eq(owner.value()))
                .order_by_desc(Column::CreatedAt),
        )
        .await
    }

    async fn count_by_owner(&self, owner: UserId) -> Result<u64, BikeQueryError> {
        BikeEntity::find()
            .filter(Column::OwnerId.eq(owner.value()))
            .count(&*self.db)
            .await
            .map_err(|e| BikeQueryError::DatabaseError(e.to_string()))
    }
}
