use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::helpers::RoleGuard;
use crate::auth::application::ports::{
    incoming::use_cases::{
        DeleteUserUseCase, ListUsersUseCase, ToggleBlockUserUseCase, UserManagementError,
    },
    outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

fn map_repository_error(e: UserRepositoryError) -> UserManagementError {
    match e {
        UserRepositoryError::UserNotFound => UserManagementError::TargetNotFound,
        other => UserManagementError::RepositoryError(other.to_string()),
    }
}

pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, query: Q) -> Self {
        Self { guard, query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<Vec<User>, UserManagementError> {
        self.guard.require_owner(caller).await?;

        let users = self
            .query
            .list_users()
            .await
            .map_err(|e| UserManagementError::RepositoryError(e.to_string()))?;

        Ok(users.iter().map(|u| u.to_user()).collect())
    }
}

pub struct ToggleBlockUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    guard: RoleGuard,
    query: Q,
    repository: R,
}

impl<Q, R> ToggleBlockUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
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
impl<Q, R> ToggleBlockUserUseCase for ToggleBlockUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId, target: UserId) -> Result<User, UserManagementError> {
        self.guard.require_owner(caller).await?;

        if caller == target {
            return Err(UserManagementError::SelfAction);
        }

        let current = self
            .query
            .find_by_id(target.value())
            .await
            .map_err(|e| UserManagementError::RepositoryError(e.to_string()))?
            .filter(|u| !u.is_deleted)
            .ok_or(UserManagementError::TargetNotFound)?;

        let updated = self
            .repository
            .set_blocked(target.value(), !current.is_blocked)
            .await
            .map_err(map_repository_error)?;

        tracing::info!(
            "Owner {} set blocked={} on user {}",
            caller,
            updated.is_blocked,
            target
        );
        Ok(updated)
    }
}

pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    guard: RoleGuard,
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, repository: R) -> Self {
        Self { guard, repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: UserId, target: UserId) -> Result<(), UserManagementError> {
        self.guard.require_owner(caller).await?;

        if caller == target {
            return Err(UserManagementError::SelfAction);
        }

        self.repository
            .soft_delete_user(target.value())
            .await
            .map_err(map_repository_error)?;

        tracing::info!("Owner {} deleted user {}", caller, target);
        Ok(())
    }
}
