use std::sync::Arc;

use crate::hub::application::ports::incoming::use_cases::{
    CreateHubUseCase, DeleteHubUseCase, GetHubUseCase, ListHubsUseCase, UpdateHubUseCase,
};

#[derive(Clone)]
pub struct HubUseCases {
    pub create: Arc<dyn CreateHubUseCase>,
    pub list: Arc<dyn ListHubsUseCase>,
    pub get: Arc<dyn GetHubUseCase>,
    pub update: Arc<dyn UpdateHubUseCase>,
    pub delete: Arc<dyn DeleteHubUseCase>,
}
