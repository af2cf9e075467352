use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::payment::application::domain::PaymentOrder;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Amount must be at least {min}")]
    InvalidAmount { min: i64 },

    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, amount: i64) -> Result<PaymentOrder, PaymentError>;
}
