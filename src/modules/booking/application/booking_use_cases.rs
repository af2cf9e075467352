use std::sync::Arc;

use crate::booking::application::ports::incoming::use_cases::{
    ChangeBookingStatusUseCase, CheckBikeAvailabilityUseCase, CreateBookingUseCase,
    ListOwnerBookingsUseCase, ListUserBookingsUseCase, PayRemainingUseCase,
    SearchAvailableBikesUseCase,
};

#[derive(Clone)]
pub struct BookingUseCases {
    pub search_available: Arc<dyn SearchAvailableBikesUseCase>,
    pub check_bike: Arc<dyn CheckBikeAvailabilityUseCase>,
    pub create: Arc<dyn CreateBookingUseCase>,
    pub list_for_user: Arc<dyn ListUserBookingsUseCase>,
    pub list_for_owner: Arc<dyn ListOwnerBookingsUseCase>,
    pub change_status: Arc<dyn ChangeBookingStatusUseCase>,
    pub pay_remaining: Arc<dyn PayRemainingUseCase>,
}
