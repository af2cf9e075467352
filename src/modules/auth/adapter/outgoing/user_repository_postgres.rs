use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: Uuid) -> Result<UserActiveModel, UserRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .filter(|m| !m.is_deleted)
            .ok_or(UserRepositoryError::UserNotFound)?;

        Ok(model.into())
    }

    async fn save(&self, active: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_query_result().to_user())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email.to_lowercase()),
            password_hash: Set(data.password_hash),
            role: Set(UserRole::User.as_str().to_string()),
            is_blocked: Set(false),
            image: Set(None),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_query_result().to_user())
    }

    async fn set_role(&self, user_id: Uuid, role: UserRole) -> Result<User, UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.role = Set(role.as_str().to_string());
        self.save(active).await
    }

    async fn set_image(&self, user_id: Uuid, image: String) -> Result<User, UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.image = Set(Some(image));
        self.save(active).await
    }

    async fn set_blocked(
        &self,
        user_id: Uuid,
        blocked: bool,
    ) -> Result<User, UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.is_blocked = Set(blocked);
        self.save(active).await
    }

    async fn soft_delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let mut active = self.load(user_id).await?;
        active.is_deleted = Set(true);
        self.save(active).await.map(|_| ())
    }
}
