use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::RoleGuard;
use crate::auth::application::ports::incoming::use_cases::{
    BecomeOwnerUseCase, DeleteUserUseCase, FetchProfileUseCase, ListUsersUseCase,
    LoginUserUseCase, RefreshTokenUseCase, RegisterUserUseCase, ToggleBlockUserUseCase,
    UpdateProfileImageUseCase,
};
use crate::auth::application::ports::outgoing::{TokenProvider, UserRepositoryError};
use crate::auth::application::services::{
    BecomeOwnerService, DeleteUserService, FetchProfileService, ListUsersService,
    LoginUserService, RefreshTokenService, RegisterUserService, ToggleBlockUserService,
    UpdateProfileImageService,
};
use crate::bike::application::bike_use_cases::BikeUseCases;
use crate::bike::application::ports::incoming::use_cases::{
    AddBikeUseCase, DeleteBikeUseCase, GetBikeUseCase, ListBikesUseCase, ListOwnerBikesUseCase,
    ToggleBikeAvailabilityUseCase, UpdateBikeUseCase,
};
use crate::bike::application::services::{
    AddBikeService, DeleteBikeService, GetBikeService, ListBikesService, ListOwnerBikesService,
    ToggleBikeAvailabilityService, UpdateBikeService,
};
use crate::booking::application::booking_use_cases::BookingUseCases;
use crate::booking::application::ports::incoming::use_cases::{
    ChangeBookingStatusUseCase, CheckBikeAvailabilityUseCase, CreateBookingUseCase,
    ListOwnerBookingsUseCase, ListUserBookingsUseCase, PayRemainingUseCase,
    SearchAvailableBikesUseCase,
};
use crate::booking::application::services::{
    ChangeBookingStatusService, CheckBikeAvailabilityService, CreateBookingService,
    ListOwnerBookingsService, ListUserBookingsService, PayRemainingService,
    SearchAvailableBikesService,
};
use crate::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::dashboard::application::services::GetDashboardService;
use crate::hub::application::hub_use_cases::HubUseCases;
use crate::hub::application::ports::incoming::use_cases::{
    CreateHubUseCase, DeleteHubUseCase, GetHubUseCase, ListHubsUseCase, UpdateHubUseCase,
};
use crate::hub::application::services::{
    CreateHubService, DeleteHubService, GetHubService, ListHubsService, UpdateHubService,
};
use crate::payment::application::payment_use_cases::PaymentUseCases;
use crate::payment::application::ports::incoming::use_cases::CreateOrderUseCase;
use crate::payment::application::services::{CreateOrderService, OrderSettings};
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` wired to empty in-memory stores. Tests swap in the use case
/// under test through the `with_*` setters.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let users = InMemoryUserQuery::default();
        let guard = RoleGuard::new(Arc::new(users.clone()));
        let user_repo = StubUserRepository::returning(Err(UserRepositoryError::UserNotFound));
        let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
        let bikes = InMemoryBikeStore::default();
        let hubs = InMemoryHubStore::default();
        let bookings = InMemoryBookingStore::default();

        let state = AppState {
            auth: AuthUseCases {
                register: Arc::new(RegisterUserService::new(
                    user_repo.clone(),
                    StubPasswordHasher,
                    Arc::clone(&tokens),
                )),
                login: Arc::new(LoginUserService::new(
                    users.clone(),
                    StubPasswordHasher,
                    Arc::clone(&tokens),
                )),
                refresh: Arc::new(RefreshTokenService::new(tokens)),
                fetch_profile: Arc::new(FetchProfileService::new(guard.clone())),
                become_owner: Arc::new(BecomeOwnerService::new(guard.clone(), user_repo.clone())),
                update_image: Arc::new(UpdateProfileImageService::new(
                    guard.clone(),
                    user_repo.clone(),
                )),
                list_users: Arc::new(ListUsersService::new(guard.clone(), users.clone())),
                toggle_block: Arc::new(ToggleBlockUserService::new(
                    guard.clone(),
                    users.clone(),
                    user_repo.clone(),
                )),
                delete_user: Arc::new(DeleteUserService::new(guard.clone(), user_repo)),
            },
            bike: BikeUseCases {
                list: Arc::new(ListBikesService::new(bikes.clone())),
                get: Arc::new(GetBikeService::new(bikes.clone())),
                add: Arc::new(AddBikeService::new(guard.clone(), bikes.clone())),
                list_owned: Arc::new(ListOwnerBikesService::new(guard.clone(), bikes.clone())),
                update: Arc::new(UpdateBikeService::new(
                    guard.clone(),
                    bikes.clone(),
                    bikes.clone(),
                )),
                toggle_availability: Arc::new(ToggleBikeAvailabilityService::new(
                    guard.clone(),
                    bikes.clone(),
                    bikes.clone(),
                )),
                delete: Arc::new(DeleteBikeService::new(
                    guard.clone(),
                    bikes.clone(),
                    bikes.clone(),
                )),
            },
            booking: BookingUseCases {
                search_available: Arc::new(SearchAvailableBikesService::new(
                    bikes.clone(),
                    bookings.clone(),
                )),
                check_bike: Arc::new(CheckBikeAvailabilityService::new(
                    bikes.clone(),
                    bookings.clone(),
                )),
                create: Arc::new(CreateBookingService::new(
                    guard.clone(),
                    bikes.clone(),
                    hubs.clone(),
                    bookings.clone(),
                    bookings.clone(),
                )),
                list_for_user: Arc::new(ListUserBookingsService::new(
                    guard.clone(),
                    bookings.clone(),
                    bikes.clone(),
                )),
                list_for_owner: Arc::new(ListOwnerBookingsService::new(
                    guard.clone(),
                    bookings.clone(),
                    bikes.clone(),
                    users,
                )),
                change_status: Arc::new(ChangeBookingStatusService::new(
                    guard.clone(),
                    bookings.clone(),
                    bookings.clone(),
                )),
                pay_remaining: Arc::new(PayRemainingService::new(
                    guard.clone(),
                    bookings.clone(),
                    bookings.clone(),
                )),
            },
            hub: HubUseCases {
                create: Arc::new(CreateHubService::new(guard.clone(), hubs.clone())),
                list: Arc::new(ListHubsService::new(guard.clone(), hubs.clone())),
                get: Arc::new(GetHubService::new(guard.clone(), hubs.clone())),
                update: Arc::new(UpdateHubService::new(guard.clone(), hubs.clone(), hubs.clone())),
                delete: Arc::new(DeleteHubService::new(guard.clone(), hubs.clone(), hubs)),
            },
            dashboard: DashboardUseCases {
                get: Arc::new(GetDashboardService::new(guard.clone(), bikes, bookings)),
            },
            payment: PaymentUseCases {
                create_order: Arc::new(CreateOrderService::new(
                    guard,
                    OfflineGateway,
                    OrderSettings {
                        currency: "INR".to_string(),
                        min_amount: 25,
                    },
                )),
            },
        };

        Self { state }
    }
}

impl TestAppStateBuilder {
    // ──── Auth ────

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.state.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.state.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.state.auth.refresh = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl FetchProfileUseCase + 'static) -> Self {
        self.state.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_become_owner(mut self, uc: impl BecomeOwnerUseCase + 'static) -> Self {
        self.state.auth.become_owner = Arc::new(uc);
        self
    }

    pub fn with_update_image(mut self, uc: impl UpdateProfileImageUseCase + 'static) -> Self {
        self.state.auth.update_image = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + 'static) -> Self {
        self.state.auth.list_users = Arc::new(uc);
        self
    }

    pub fn with_toggle_block(mut self, uc: impl ToggleBlockUserUseCase + 'static) -> Self {
        self.state.auth.toggle_block = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.state.auth.delete_user = Arc::new(uc);
        self
    }

    // ──── Bikes ────

    pub fn with_list_bikes(mut self, uc: impl ListBikesUseCase + 'static) -> Self {
        self.state.bike.list = Arc::new(uc);
        self
    }

    pub fn with_get_bike(mut self, uc: impl GetBikeUseCase + 'static) -> Self {
        self.state.bike.get = Arc::new(uc);
        self
    }

    pub fn with_add_bike(mut self, uc: impl AddBikeUseCase + 'static) -> Self {
        self.state.bike.add = Arc::new(uc);
        self
    }

    pub fn with_owner_bikes(mut self, uc: impl ListOwnerBikesUseCase + 'static) -> Self {
        self.state.bike.list_owned = Arc::new(uc);
        self
    }

    pub fn with_update_bike(mut self, uc: impl UpdateBikeUseCase + 'static) -> Self {
        self.state.bike.update = Arc::new(uc);
        self
    }

    pub fn with_toggle_bike(mut self, uc: impl ToggleBikeAvailabilityUseCase + 'static) -> Self {
        self.state.bike.toggle_availability = Arc::new(uc);
        self
    }

    pub fn with_delete_bike(mut self, uc: impl DeleteBikeUseCase + 'static) -> Self {
        self.state.bike.delete = Arc::new(uc);
        self
    }

    // ──── Bookings ────

    pub fn with_search_available(
        mut self,
        uc: impl SearchAvailableBikesUseCase + 'static,
    ) -> Self {
        self.state.booking.search_available = Arc::new(uc);
        self
    }

    pub fn with_check_bike(mut self, uc: impl CheckBikeAvailabilityUseCase + 'static) -> Self {
        self.state.booking.check_bike = Arc::new(uc);
        self
    }

    pub fn with_create_booking(mut self, uc: impl CreateBookingUseCase + 'static) -> Self {
        self.state.booking.create = Arc::new(uc);
        self
    }

    pub fn with_user_bookings(mut self, uc: impl ListUserBookingsUseCase + 'static) -> Self {
        self.state.booking.list_for_user = Arc::new(uc);
        self
    }

    pub fn with_owner_bookings(mut self, uc: impl ListOwnerBookingsUseCase + 'static) -> Self {
        self.state.booking.list_for_owner = Arc::new(uc);
        self
    }

    pub fn with_change_status(mut self, uc: impl ChangeBookingStatusUseCase + 'static) -> Self {
        self.state.booking.change_status = Arc::new(uc);
        self
    }

    pub fn with_pay_remaining(mut self, uc: impl PayRemainingUseCase + 'static) -> Self {
        self.state.booking.pay_remaining = Arc::new(uc);
        self
    }

    // ──── Hubs ────

    pub fn with_create_hub(mut self, uc: impl CreateHubUseCase + 'static) -> Self {
        self.state.hub.create = Arc::new(uc);
        self
    }

    pub fn with_list_hubs(mut self, uc: impl ListHubsUseCase + 'static) -> Self {
        self.state.hub.list = Arc::new(uc);
        self
    }

    pub fn with_get_hub(mut self, uc: impl GetHubUseCase + 'static) -> Self {
        self.state.hub.get = Arc::new(uc);
        self
    }

    pub fn with_update_hub(mut self, uc: impl UpdateHubUseCase + 'static) -> Self {
        self.state.hub.update = Arc::new(uc);
        self
    }

    pub fn with_delete_hub(mut self, uc: impl DeleteHubUseCase + 'static) -> Self {
        self.state.hub.delete = Arc::new(uc);
        self
    }

    // ──── Dashboard & payment ────

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + 'static) -> Self {
        self.state.dashboard.get = Arc::new(uc);
        self
    }

    pub fn with_create_order(mut self, uc: impl CreateOrderUseCase + 'static) -> Self {
        self.state.payment.create_order = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
