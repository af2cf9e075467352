pub mod create_order;

pub use create_order::{CreateOrderUseCase, PaymentError};
