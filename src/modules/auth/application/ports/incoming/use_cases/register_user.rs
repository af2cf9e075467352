use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::User;

pub const MIN_PASSWORD_LEN: usize = 8;

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Name is required")]
    EmptyName,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl RegisterCommand {
    pub fn new(name: String, email: String, password: String) -> Result<Self, RegisterCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterCommandError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterCommandError::InvalidEmail);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterCommandError::PasswordTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

/// Token pair handed out on register and login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterCommand) -> Result<AuthTokens, RegisterError>;
}
