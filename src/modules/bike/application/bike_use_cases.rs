use std::sync::Arc;

use crate::bike::application::ports::incoming::use_cases::{
    AddBikeUseCase, DeleteBikeUseCase, GetBikeUseCase, ListBikesUseCase, ListOwnerBikesUseCase,
    ToggleBikeAvailabilityUseCase, UpdateBikeUseCase,
};

#[derive(Clone)]
pub struct BikeUseCases {
    pub list: Arc<dyn ListBikesUseCase>,
    pub get: Arc<dyn GetBikeUseCase>,
    pub add: Arc<dyn AddBikeUseCase>,
    pub list_owned: Arc<dyn ListOwnerBikesUseCase>,
    pub update: Arc<dyn UpdateBikeUseCase>,
    pub toggle_availability: Arc<dyn ToggleBikeAvailabilityUseCase>,
    pub delete: Arc<dyn DeleteBikeUseCase>,
}
