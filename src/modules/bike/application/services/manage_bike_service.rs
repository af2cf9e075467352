use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::{
    incoming::use_cases::{
        BikeError, DeleteBikeUseCase, ListOwnerBikesUseCase, ToggleBikeAvailabilityUseCase,
        UpdateBikeCommand, UpdateBikeUseCase,
    },
    outgoing::{BikeQuery, BikeRepository, BikeRepositoryError},
};

fn map_repository_error(e: BikeRepositoryError) -> BikeError {
    match e {
        BikeRepositoryError::NotFound => BikeError::NotFound,
        other => BikeError::RepositoryError(other.to_string()),
    }
}

/// Loads a catalog bike and checks that `caller` owns it
async fn load_owned<Q>(query: &Q, caller: UserId, bike_id: Uuid) -> Result<Bike, BikeError>
where
    Q: BikeQuery + Send + Sync,
{
    let bike = query
        .find_by_id(bike_id)
        .await
        .map_err(|e| BikeError::RepositoryError(e.to_string()))?
        .filter(|b| b.owner_id.is_some())
        .ok_or(BikeError::NotFound)?;

    if !bike.is_owned_by(caller) {
        tracing::warn!("User {} tried to modify bike {} of another owner", caller, bike_id);
        return Err(BikeError::Forbidden);
    }

    Ok(bike)
}

pub struct ListOwnerBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
}

impl<Q> ListOwnerBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q) -> Self {
        Self { guard, query }
    }
}

#[async_trait]
impl<Q> ListOwnerBikesUseCase for ListOwnerBikesService<Q>
where
    Q: BikeQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<Vec<Bike>, BikeError> {
        self.guard.require_owner(caller).await?;

        self.query
            .list_by_owner(caller)
            .await
            .map_err(|e| BikeError::RepositoryError(e.to_string()))
    }
}

pub struct UpdateBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> UpdateBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q, repository: R) -> Self {
        Self {
            guard,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateBikeUseCase for UpdateBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        bike_id: Uuid,
        command: UpdateBikeCommand,
    ) -> Result<Bike, BikeError> {
        self.guard.require_owner(caller).await?;
        load_owned(&self.query, caller, bike_id).await?;

        self.repository
            .update_bike(bike_id, command.into_patch())
            .await
            .map_err(map_repository_error)
    }
}

pub struct ToggleBikeAvailabilityService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> ToggleBikeAvailabilityService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q, repository: R) -> Self {
        Self {
            guard,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> ToggleBikeAvailabilityUseCase for ToggleBikeAvailabilityService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId, bike_id: Uuid) -> Result<Bike, BikeError> {
        self.guard.require_owner(caller).await?;
        let bike = load_owned(&self.query, caller, bike_id).await?;

        self.repository
            .set_availability(bike_id, !bike.is_available)
            .await
            .map_err(map_repository_error)
    }
}

pub struct DeleteBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> DeleteBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q, repository: R) -> Self {
        Self {
            guard,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteBikeUseCase for DeleteBikeService<Q, R>
where
    Q: BikeQuery + Send + Sync,
    R: BikeRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId, bike_id: Uuid) -> Result<(), BikeError> {
        self.guard.require_owner(caller).await?;
        load_owned(&self.query, caller, bike_id).await?;

        self.repository
            .detach_owner(bike_id)
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Owner {} removed bike {}", caller, bike_id);
        Ok(())
    }
}
