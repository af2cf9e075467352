use std::sync::Arc;

use crate::payment::application::ports::incoming::use_cases::CreateOrderUseCase;

#[derive(Clone)]
pub struct PaymentUseCases {
    pub create_order: Arc<dyn CreateOrderUseCase>,
}
