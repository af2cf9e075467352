use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::payment::application::domain::{OrderRequest, PaymentOrder};
use crate::payment::application::ports::incoming::use_cases::{CreateOrderUseCase, PaymentError};
use crate::payment::application::ports::outgoing::PaymentGateway;

#[derive(Debug, Clone)]
pub struct OrderSettings {
    pub currency: String,
    pub min_amount: i64,
}

pub struct CreateOrderService<G>
where
    G: PaymentGateway + Send + Sync,
{
    guard: RoleGuard,
    gateway: G,
    settings: OrderSettings,
}

impl<G> CreateOrderService<G>
where
    G: PaymentGateway + Send + Sync,
{
    pub fn new(guard: RoleGuard, gateway: G, settings: OrderSettings) -> Self {
        Self {
            guard,
            gateway,
            settings,
        }
    }
}

#[async_trait]
impl<G> CreateOrderUseCase for CreateOrderService<G>
where
    G: PaymentGateway + Send + Sync,
{
    async fn execute(&self, caller: UserId, amount: i64) -> Result<PaymentOrder, PaymentError> {
        self.guard.require_active(caller).await?;

        let min = self.settings.min_amount;
        if amount < min {
            return Err(PaymentError::InvalidAmount { min });
        }

        let receipt = format!("receipt_{}", Utc::now().timestamp_millis());
        let request = OrderRequest::from_major(amount, &self.settings.currency, receipt)
            .ok_or(PaymentError::InvalidAmount { min })?;

        let order = self.gateway.create_order(request).await.map_err(|e| {
            tracing::error!("Order creation for user {} failed: {}", caller, e);
            PaymentError::Gateway(e.to_string())
        })?;

        tracing::info!("Created gateway order {} for user {}", order.id, caller);
        Ok(order)
    }
}
