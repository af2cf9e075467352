pub mod gateway_config;
pub mod http_gateway;

pub use gateway_config::{GatewayConfig, GatewayConfigError};
pub use http_gateway::HttpPaymentGateway;
