use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::helpers::AccessError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<User, ProfileError>;
}

/// Promotes the caller to the owner role. Already being an owner is fine.
#[async_trait]
pub trait BecomeOwnerUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<User, ProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileImageCommand {
    image: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileImageError {
    #[error("Image URL is required")]
    EmptyImage,
}

impl UpdateProfileImageCommand {
    pub fn new(image: String) -> Result<Self, UpdateProfileImageError> {
        let image = image.trim();
        if image.is_empty() {
            return Err(UpdateProfileImageError::EmptyImage);
        }
        Ok(Self {
            image: image.to_string(),
        })
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

#[async_trait]
pub trait UpdateProfileImageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        command: UpdateProfileImageCommand,
    ) -> Result<User, ProfileError>;
}
