use async_trait::async_trait;

use crate::payment::application::domain::{OrderRequest, PaymentOrder};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway unreachable: {0}")]
    Transport(String),

    #[error("Gateway rejected the order with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Unexpected gateway response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(&self, request: OrderRequest) -> Result<PaymentOrder, GatewayError>;
}
