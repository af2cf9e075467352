use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::bikes::{ActiveModel as BikeActiveModel, Entity as BikeEntity};
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::outgoing::{
    BikePatch, BikeRepository, BikeRepositoryError, CreateBikeData,
};
use crate::shared::patch::PatchField;

#[derive(Clone, Debug)]
pub struct BikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, bike_id: Uuid) -> Result<BikeActiveModel, BikeRepositoryError> {
        let model = BikeEntity::find_by_id(bike_id)
            .one(&*self.db)
            .await
            .map_err(|e| BikeRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(BikeRepositoryError::NotFound)?;

        Ok(model.into())
    }

    async fn save(&self, active: BikeActiveModel) -> Result<Bike, BikeRepositoryError> {
        let model = active
            .update(&*self.db)
            .await
            .map_err(|e| BikeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.to_domain())
    }
}

#[async_trait]
impl BikeRepository for BikeRepositoryPostgres {
    async fn create_bike(&self, data: CreateBikeData) -> Result<Bike, BikeRepositoryError> {
        let active = BikeActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(Some(data.owner.value())),
            brand: Set(data.brand),
            model: Set(data.model),
            image: Set(data.image),
            year: Set(data.year),
            category: Set(data.category),
            seating_capacity: Set(data.seating_capacity),
            fuel_type: Set(data.fuel_type),
            transmission: Set(data.transmission),
            price_per_day: Set(data.price_per_day),
            price_per_hour: Set(data.price_per_hour),
            location: Set(data.location),
            description: Set(data.description),
            is_available: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let model = active
            .insert(&*self.db)
            .await
            .map_err(|e| BikeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.to_domain())
    }

    async fn update_bike(
        &self,
        bike_id: Uuid,
        patch: BikePatch,
    ) -> Result<Bike, BikeRepositoryError> {
        let mut active = self.load(bike_id).await?;

        if let Some(v) = patch.brand {
            active.brand = Set(v);
        }
        if let Some(v) = patch.model {
            active.model = Set(v);
        }
        if let Some(v) = patch.image {
            active.image = Set(v);
        }
        if let Some(v) = patch.year {
            active.year = Set(v);
        }
        if let Some(v) = patch.category {
            active.category = Set(v);
        }
        if let Some(v) = patch.seating_capacity {
            active.seating_capacity = Set(v);
        }
        if let Some(v) = patch.fuel_type {
            active.fuel_type = Set(v);
        }
        if let Some(v) = patch.transmission {
            active.transmission = Set(v);
        }
        if let Some(v) = patch.price_per_day {
            active.price_per_day = Set(v);
        }
        match patch.price_per_hour {
            PatchField::Unset => {}
            PatchField::Null => active.price_per_hour = Set(None),
            PatchField::Value(v) => active.price_per_hour = Set(Some(v)),
        }
        if let Some(v) = patch.location {
            active.location = Set(v);
        }
        if let Some(v) = patch.description {
            active.description = Set(v);
        }

        self.save(active).await
    }

    async fn set_availability(
        &self,
        bike_id: Uuid,
        available: bool,
    ) -> Result<Bike, BikeRepositoryError> {
        let mut active = self.load(bike_id).await?;
        active.is_available = Set(available);
        self.save(active).await
    }

    async fn detach_owner(&self, bike_id: Uuid) -> Result<(), BikeRepositoryError> {
        let mut active = self.load(bike_id).await?;
        active.owner_id = Set(None);
        active.is_available = Set(false);
        self.save(active).await.map(|_| ())
    }
}
