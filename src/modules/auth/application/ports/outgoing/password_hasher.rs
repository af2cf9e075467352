use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Hashing worker did not complete")]
    TaskFailed,

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),
}

/// Credential hashing for registration and login.
///
/// `verify_password` answers `Ok(false)` for a wrong password; `Err` is
/// reserved for hashes that cannot be parsed or a failed worker.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
