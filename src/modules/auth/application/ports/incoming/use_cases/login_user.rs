use async_trait::async_trait;

use super::register_user::AuthTokens;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Email is required")]
    EmptyEmail,

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginCommandError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginCommandError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User is blocked")]
    UserBlocked,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthTokens, LoginError>;
}
