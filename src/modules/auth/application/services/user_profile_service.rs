use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId, UserRole};
use crate::auth::application::helpers::RoleGuard;
use crate::auth::application::ports::{
    incoming::use_cases::{
        BecomeOwnerUseCase, FetchProfileUseCase, ProfileError, UpdateProfileImageCommand,
        UpdateProfileImageUseCase,
    },
    outgoing::UserRepository,
};

#[derive(Clone)]
pub struct FetchProfileService {
    guard: RoleGuard,
}

impl FetchProfileService {
    pub fn new(guard: RoleGuard) -> Self {
        Self { guard }
    }
}

#[async_trait]
impl FetchProfileUseCase for FetchProfileService {
    async fn execute(&self, caller: UserId) -> Result<User, ProfileError> {
        Ok(self.guard.require_active(caller).await?)
    }
}

pub struct BecomeOwnerService<R>
where
    R: UserRepository + Send + Sync,
{
    guard: RoleGuard,
    repository: R,
}

impl<R> BecomeOwnerService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, repository: R) -> Self {
        Self { guard, repository }
    }
}

#[async_trait]
impl<R> BecomeOwnerUseCase for BecomeOwnerService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<User, ProfileError> {
        let user = self.guard.require_active(caller).await?;
        if user.is_owner() {
            return Ok(user);
        }

        let promoted = self
            .repository
            .set_role(caller.value(), UserRole::Owner)
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))?;

        tracing::info!("User {} is now an owner", caller);
        Ok(promoted)
    }
}

pub struct UpdateProfileImageService<R>
where
    R: UserRepository + Send + Sync,
{
    guard: RoleGuard,
    repository: R,
}

impl<R> UpdateProfileImageService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, repository: R) -> Self {
        Self { guard, repository }
    }
}

#[async_trait]
impl<R> UpdateProfileImageUseCase for UpdateProfileImageService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        command: UpdateProfileImageCommand,
    ) -> Result<User, ProfileError> {
        self.guard.require_active(caller).await?;

        self.repository
            .set_image(caller.value(), command.image().to_string())
            .await
            .map_err(|e| ProfileError::RepositoryError(e.to_string()))
    }
}
