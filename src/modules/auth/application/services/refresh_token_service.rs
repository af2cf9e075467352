use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{RefreshTokenError, RefreshTokenUseCase},
    outgoing::{TokenError, TokenProvider},
};

#[derive(Clone)]
pub struct RefreshTokenService {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenService {
    pub fn new(tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        self.tokens
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
                _ => RefreshTokenError::InvalidToken,
            })
    }
}
