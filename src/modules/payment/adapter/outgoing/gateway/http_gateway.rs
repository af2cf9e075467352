use std::time::Duration;

use async_trait::async_trait;

use super::GatewayConfig;
use crate::payment::application::domain::{OrderRequest, PaymentOrder};
use crate::payment::application::ports::outgoing::{GatewayError, PaymentGateway};

/// Razorpay-compatible orders API client
#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    orders_url: String,
    key_id: String,
    key_secret: String,
}

impl HttpPaymentGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            orders_url: format!("{}/orders", config.base_url.trim_end_matches('/')),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<PaymentOrder, GatewayError> {
        let response = self
            .client
            .post(&self.orders_url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Payment gateway rejected order");
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<PaymentOrder>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}
