use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{AuthTokens, RegisterCommand, RegisterError, RegisterUserUseCase},
    outgoing::{CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError},
};

pub struct RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    repository: R,
    hasher: H,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R, H> RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(repository: R, hasher: H, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H> RegisterUserUseCase for RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, command: RegisterCommand) -> Result<AuthTokens, RegisterError> {
        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                name: command.name().to_string(),
                email: command.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterError::UserAlreadyExists,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let access_token = self
            .tokens
            .generate_access_token(user.id.value())
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user.id.value())
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!("Registered user {}", user.id);

        Ok(AuthTokens {
            access_token,
            refresh_token,
            user,
        })
    }
}
