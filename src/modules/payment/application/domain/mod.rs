pub mod order;

pub use order::{OrderRequest, PaymentOrder};
