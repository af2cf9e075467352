use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccessError {
    #[error("User not found")]
    UserNotFound,

    #[error("User is blocked")]
    Blocked,

    #[error("Owner role required")]
    NotOwner,

    #[error("Query error: {0}")]
    QueryFailed(String),
}

/// Resolves a token subject into a live account and enforces role rules.
///
/// Role and blocked state are read from storage on every call, so a
/// promotion or a block takes effect without reissuing tokens.
#[derive(Clone)]
pub struct RoleGuard {
    users: Arc<dyn UserQuery + Send + Sync>,
}

impl RoleGuard {
    pub fn new(users: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { users }
    }

    pub async fn require_active(&self, user_id: UserId) -> Result<User, AccessError> {
        let found = self
            .users
            .find_by_id(user_id.value())
            .await
            .map_err(|e| AccessError::QueryFailed(e.to_string()))?;

        let user = match found {
            Some(u) if !u.is_deleted => u,
            _ => return Err(AccessError::UserNotFound),
        };

        if user.is_blocked {
            tracing::warn!("Blocked user {} attempted an authenticated call", user_id);
            return Err(AccessError::Blocked);
        }

        Ok(user.to_user())
    }

    pub async fn require_owner(&self, user_id: UserId) -> Result<User, AccessError> {
        let user = self.require_active(user_id).await?;

        if !user.is_owner() {
            return Err(AccessError::NotOwner);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::UserQueryResult;
    use crate::tests::support::fixtures::user_row;
    use crate::tests::support::stubs::InMemoryUserQuery;
    use uuid::Uuid;

    fn guard_with(rows: Vec<UserQueryResult>) -> RoleGuard {
        RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(rows)))
    }

    #[tokio::test]
    async fn active_user_passes() {
        let id = Uuid::new_v4();
        let guard = guard_with(vec![user_row(id, UserRole::User)]);

        let user = guard.require_active(UserId::from(id)).await.unwrap();

        assert_eq!(user.id.value(), id);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let guard = guard_with(vec![]);

        let result = guard.require_active(UserId::from(Uuid::new_v4())).await;

        assert_eq!(result.unwrap_err(), AccessError::UserNotFound);
    }

    #[tokio::test]
    async fn deleted_user_is_not_found() {
        let id = Uuid::new_v4();
        let mut row = user_row(id, UserRole::Owner);
        row.is_deleted = true;
        let guard = guard_with(vec![row]);

        let result = guard.require_owner(UserId::from(id)).await;

        assert_eq!(result.unwrap_err(), AccessError::UserNotFound);
    }

    #[tokio::test]
    async fn blocked_user_is_rejected() {
        let id = Uuid::new_v4();
        let mut row = user_row(id, UserRole::User);
        row.is_blocked = true;
        let guard = guard_with(vec![row]);

        let result = guard.require_active(UserId::from(id)).await;

        assert_eq!(result.unwrap_err(), AccessError::Blocked);
    }

    #[tokio::test]
    async fn plain_user_is_not_owner() {
        let id = Uuid::new_v4();
        let guard = guard_with(vec![user_row(id, UserRole::User)]);

        let result = guard.require_owner(UserId::from(id)).await;

        assert_eq!(result.unwrap_err(), AccessError::NotOwner);
    }

    #[tokio::test]
    async fn owner_passes_owner_check() {
        let id = Uuid::new_v4();
        let guard = guard_with(vec![user_row(id, UserRole::Owner)]);

        let user = guard.require_owner(UserId::from(id)).await.unwrap();

        assert!(user.is_owner());
    }
}
