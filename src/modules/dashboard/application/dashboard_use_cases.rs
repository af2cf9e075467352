use std::sync::Arc;

use crate::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;

#[derive(Clone)]
pub struct DashboardUseCases {
    pub get: Arc<dyn GetDashboardUseCase>,
}
