use std::env;

use crate::payment::application::services::OrderSettings;

const DEFAULT_GATEWAY_URL: &str = "https://api.razorpay.com/v1";
const DEFAULT_CURRENCY: &str = "INR";
const DEFAULT_MIN_AMOUNT: i64 = 25;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum GatewayConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PAYMENT_MIN_AMOUNT must be a positive integer")]
    InvalidMinAmount,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub key_id: String,
    pub key_secret: String,
    pub currency: String,
    pub min_amount: i64,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayConfigError> {
        let key_id =
            env::var("PAYMENT_KEY_ID").map_err(|_| GatewayConfigError::Missing("PAYMENT_KEY_ID"))?;
        let key_secret = env::var("PAYMENT_KEY_SECRET")
            .map_err(|_| GatewayConfigError::Missing("PAYMENT_KEY_SECRET"))?;
        let min_amount = match env::var("PAYMENT_MIN_AMOUNT") {
            Ok(raw) => Self::parse_min_amount(&raw)?,
            Err(_) => DEFAULT_MIN_AMOUNT,
        };

        Ok(Self {
            base_url: env::var("PAYMENT_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            key_id,
            key_secret,
            currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            min_amount,
        })
    }

    fn parse_min_amount(raw: &str) -> Result<i64, GatewayConfigError> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or(GatewayConfigError::InvalidMinAmount)
    }

    pub fn order_settings(&self) -> OrderSettings {
        OrderSettings {
            currency: self.currency.clone(),
            min_amount: self.min_amount,
        }
    }
}
