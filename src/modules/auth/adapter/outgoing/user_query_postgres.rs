use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.to_lowercase()))
            .filter(UserColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_query_result()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<UserQueryResult>, UserQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(|m| m.to_query_result()).collect())
    }

    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::IsDeleted.eq(false))
            .order_by_desc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(|m| m.to_query_result()).collect())
    }
}
