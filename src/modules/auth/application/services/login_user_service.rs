use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{AuthTokens, LoginCommand, LoginError, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

pub struct LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    query: Q,
    hasher: H,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, H> LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(query: Q, hasher: H, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, H> LoginUserUseCase for LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthTokens, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .filter(|u| !u.is_deleted)
            .ok_or(LoginError::InvalidCredentials)?;

        let valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !valid {
            tracing::debug!("Password mismatch for user {}", user.id);
            return Err(LoginError::InvalidCredentials);
        }

        if user.is_blocked {
            return Err(LoginError::UserBlocked);
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(user.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            user: user.to_user(),
        })
    }
}
