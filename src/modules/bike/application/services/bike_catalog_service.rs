use async_trait::async_trait;
use uuid::Uuid;

use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::{
    incoming::use_cases::{BikeError, GetBikeUseCase, ListBikesUseCase},
    outgoing::BikeQuery,
};

#[derive(Debug, Clone)]
pub struct ListBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListBikesUseCase for ListBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Bike>, BikeError> {
        self.query
            .list_listed()
            .await
            .map_err(|e| BikeError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetBikeService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetBikeService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBikeUseCase for GetBikeService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    async fn execute(&self, bike_id: Uuid) -> Result<Bike, BikeError> {
        self.query
            .find_by_id(bike_id)
            .await
            .map_err(|e| BikeError::RepositoryError(e.to_string()))?
            // detached bikes are gone from the catalog
            .filter(|b| b.owner_id.is_some())
            .ok_or(BikeError::NotFound)
    }
}
