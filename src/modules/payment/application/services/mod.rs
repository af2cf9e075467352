pub mod create_order_service;

pub use create_order_service::{CreateOrderService, OrderSettings};
