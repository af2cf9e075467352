use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::hub::application::domain::entities::{validate_hours, Hub};
use crate::hub::application::ports::{
    incoming::use_cases::{
        CreateHubCommand, CreateHubUseCase, DeleteHubUseCase, GetHubUseCase, HubError,
        ListHubsUseCase, UpdateHubCommand, UpdateHubUseCase,
    },
    outgoing::{HubQuery, HubRepository, HubRepositoryError},
};

fn map_repository_error(e: HubRepositoryError) -> HubError {
    match e {
        HubRepositoryError::NotFound => HubError::NotFound,
        other => HubError::RepositoryError(other.to_string()),
    }
}

async fn load_hub<Q>(query: &Q, hub_id: Uuid) -> Result<Hub, HubError>
where
    Q: HubQuery + Send + Sync,
{
    query
        .find_by_id(hub_id)
        .await
        .map_err(|e| HubError::RepositoryError(e.to_string()))?
        .ok_or(HubError::NotFound)
}

/// Mutations on a foreign hub are forbidden rather than hidden
async fn load_for_mutation<Q>(query: &Q, caller: UserId, hub_id: Uuid) -> Result<Hub, HubError>
where
    Q: HubQuery + Send + Sync,
{
    let hub = load_hub(query, hub_id).await?;
    if !hub.is_owned_by(caller) {
        tracing::warn!("User {} tried to modify hub {} of another owner", caller, hub_id);
        return Err(HubError::Forbidden);
    }
    Ok(hub)
}

// ──── Create ────

pub struct CreateHubService<R>
where
    R: HubRepository + Send + Sync,
{
    guard: RoleGuard,
    repository: R,
}

impl<R> CreateHubService<R>
where
    R: HubRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, repository: R) -> Self {
        Self { guard, repository }
    }
}

#[async_trait]
impl<R> CreateHubUseCase for CreateHubService<R>
where
    R: HubRepository + Send + Sync,
{
    async fn execute(&self, command: CreateHubCommand) -> Result<Hub, HubError> {
        let owner = command.owner();
        self.guard.require_owner(owner).await?;

        let hub = self
            .repository
            .create_hub(command.into_data())
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Owner {} created hub {}", owner, hub.id);
        Ok(hub)
    }
}

// ──── Read ────

pub struct ListHubsService<Q>
where
    Q: HubQuery + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
}

impl<Q> ListHubsService<Q>
where
    Q: HubQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q) -> Self {
        Self { guard, query }
    }
}

#[async_trait]
impl<Q> ListHubsUseCase for ListHubsService<Q>
where
    Q: HubQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<Vec<Hub>, HubError> {
        self.guard.require_owner(caller).await?;

        self.query
            .list_by_owner(caller)
            .await
            .map_err(|e| HubError::RepositoryError(e.to_string()))
    }
}

pub struct GetHubService<Q>
where
    Q: HubQuery + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
}

impl<Q> GetHubService<Q>
where
    Q: HubQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q) -> Self {
        Self { guard, query }
    }
}

#[async_trait]
impl<Q> GetHubUseCase for GetHubService<Q>
where
    Q: HubQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId, hub_id: Uuid) -> Result<Hub, HubError> {
        self.guard.require_owner(caller).await?;

        let hub = load_hub(&self.query, hub_id).await?;
        if !hub.is_owned_by(caller) {
            return Err(HubError::NotFound);
        }
        Ok(hub)
    }
}

// ──── Update / Delete ────

pub struct UpdateHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> UpdateHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
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
impl<Q, R> UpdateHubUseCase for UpdateHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        hub_id: Uuid,
        command: UpdateHubCommand,
    ) -> Result<Hub, HubError> {
        self.guard.require_owner(caller).await?;
        let mut hub = load_for_mutation(&self.query, caller, hub_id).await?;

        command.into_patch().apply(&mut hub);
        validate_hours(&hub.open_time, &hub.close_time)?;

        let saved = self
            .repository
            .save_hub(&hub)
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Owner {} updated hub {}", caller, hub_id);
        Ok(saved)
    }
}

pub struct DeleteHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> DeleteHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
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
impl<Q, R> DeleteHubUseCase for DeleteHubService<Q, R>
where
    Q: HubQuery + Send + Sync,
    R: HubRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId, hub_id: Uuid) -> Result<(), HubError> {
        self.guard.require_owner(caller).await?;
        load_for_mutation(&self.query, caller, hub_id).await?;

        self.repository
            .delete_hub(hub_id)
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Owner {} deleted hub {}", caller, hub_id);
        Ok(())
    }
}
