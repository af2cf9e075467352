use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What is sent to the gateway. `amount` is in the currency's minor unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

impl OrderRequest {
    /// Converts a whole-unit amount (rupees) to paise
    pub fn from_major(amount: i64, currency: &str, receipt: String) -> Option<Self> {
        Some(Self {
            amount: amount.checked_mul(100)?,
            currency: currency.to_string(),
            receipt,
        })
    }
}

/// Order as returned by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentOrder {
    #[schema(example = "order_Q1xyz")]
    pub id: String,
    /// Minor units
    #[schema(example = 50000)]
    pub amount: i64,
    #[schema(example = "INR")]
    pub currency: String,
    pub receipt: Option<String>,
    #[schema(example = "created")]
    pub status: String,
}
