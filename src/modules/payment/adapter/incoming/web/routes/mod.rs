mod create_order;

pub use create_order::{create_order_handler, CreateOrderRequestDto, __path_create_order_handler};
