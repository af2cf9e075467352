pub mod gateway;

pub use gateway::{GatewayConfig, GatewayConfigError, HttpPaymentGateway};
