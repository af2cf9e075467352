use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid or expired refresh token")]
    InvalidToken,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    /// Returns a fresh access token
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}
