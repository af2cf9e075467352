pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, bike, booking, dashboard, hub, payment};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::RoleGuard;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::{
    BecomeOwnerService, DeleteUserService, FetchProfileService, ListUsersService,
    LoginUserService, RefreshTokenService, RegisterUserService, ToggleBlockUserService,
    UpdateProfileImageService,
};
use crate::bike::adapter::outgoing::{BikeQueryPostgres, BikeRepositoryPostgres};
use crate::bike::application::bike_use_cases::BikeUseCases;
use crate::bike::application::services::{
    AddBikeService, DeleteBikeService, GetBikeService, ListBikesService, ListOwnerBikesService,
    ToggleBikeAvailabilityService, UpdateBikeService,
};
use crate::booking::adapter::outgoing::{BookingQueryPostgres, BookingRepositoryPostgres};
use crate::booking::application::booking_use_cases::BookingUseCases;
use crate::booking::application::services::{
    ChangeBookingStatusService, CheckBikeAvailabilityService, CreateBookingService,
    ListOwnerBookingsService, ListUserBookingsService, PayRemainingService,
    SearchAvailableBikesService,
};
use crate::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::dashboard::application::services::GetDashboardService;
use crate::hub::adapter::outgoing::{HubQueryPostgres, HubRepositoryPostgres};
use crate::hub::application::hub_use_cases::HubUseCases;
use crate::hub::application::services::{
    CreateHubService, DeleteHubService, GetHubService, ListHubsService, UpdateHubService,
};
use crate::payment::adapter::outgoing::{GatewayConfig, HttpPaymentGateway};
use crate::payment::application::payment_use_cases::PaymentUseCases;
use crate::payment::application::services::CreateOrderService;
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub bike: BikeUseCases,
    pub booking: BookingUseCases,
    pub hub: HubUseCases,
    pub dashboard: DashboardUseCases,
    pub payment: PaymentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %rust_env, "Starting bike rental backend");

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to apply migrations")?;
    info!("Database schema is up to date");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let hasher = Argon2Hasher::from_env()?;
    let gateway_config = GatewayConfig::from_env()?;
    let gateway = HttpPaymentGateway::new(&gateway_config)?;

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let bike_query = BikeQueryPostgres::new(Arc::clone(&db_arc));
    let bike_repo = BikeRepositoryPostgres::new(Arc::clone(&db_arc));
    let hub_query = HubQueryPostgres::new(Arc::clone(&db_arc));
    let hub_repo = HubRepositoryPostgres::new(Arc::clone(&db_arc));
    let booking_query = BookingQueryPostgres::new(Arc::clone(&db_arc));
    let booking_repo = BookingRepositoryPostgres::new(Arc::clone(&db_arc));

    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let guard = RoleGuard::new(Arc::new(user_query.clone()));

    let state = AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                user_repo.clone(),
                hasher.clone(),
                Arc::clone(&token_provider),
            )),
            login: Arc::new(LoginUserService::new(
                user_query.clone(),
                hasher,
                Arc::clone(&token_provider),
            )),
            refresh: Arc::new(RefreshTokenService::new(Arc::clone(&token_provider))),
            fetch_profile: Arc::new(FetchProfileService::new(guard.clone())),
            become_owner: Arc::new(BecomeOwnerService::new(guard.clone(), user_repo.clone())),
            update_image: Arc::new(UpdateProfileImageService::new(
                guard.clone(),
                user_repo.clone(),
            )),
            list_users: Arc::new(ListUsersService::new(guard.clone(), user_query.clone())),
            toggle_block: Arc::new(ToggleBlockUserService::new(
                guard.clone(),
                user_query.clone(),
                user_repo.clone(),
            )),
            delete_user: Arc::new(DeleteUserService::new(guard.clone(), user_repo)),
        },
        bike: BikeUseCases {
            list: Arc::new(ListBikesService::new(bike_query.clone())),
            get: Arc::new(GetBikeService::new(bike_query.clone())),
            add: Arc::new(AddBikeService::new(guard.clone(), bike_repo.clone())),
            list_owned: Arc::new(ListOwnerBikesService::new(guard.clone(), bike_query.clone())),
            update: Arc::new(UpdateBikeService::new(
                guard.clone(),
                bike_query.clone(),
                bike_repo.clone(),
            )),
            toggle_availability: Arc::new(ToggleBikeAvailabilityService::new(
                guard.clone(),
                bike_query.clone(),
                bike_repo.clone(),
            )),
            delete: Arc::new(DeleteBikeService::new(
                guard.clone(),
                bike_query.clone(),
                bike_repo,
            )),
        },
        booking: BookingUseCases {
            search_available: Arc::new(SearchAvailableBikesService::new(
                bike_query.clone(),
                booking_query.clone(),
            )),
            check_bike: Arc::new(CheckBikeAvailabilityService::new(
                bike_query.clone(),
                booking_query.clone(),
            )),
            create: Arc::new(CreateBookingService::new(
                guard.clone(),
                bike_query.clone(),
                hub_query.clone(),
                booking_query.clone(),
                booking_repo.clone(),
            )),
            list_for_user: Arc::new(ListUserBookingsService::new(
                guard.clone(),
                booking_query.clone(),
                bike_query.clone(),
            )),
            list_for_owner: Arc::new(ListOwnerBookingsService::new(
                guard.clone(),
                booking_query.clone(),
                bike_query.clone(),
                user_query,
            )),
            change_status: Arc::new(ChangeBookingStatusService::new(
                guard.clone(),
                booking_query.clone(),
                booking_repo.clone(),
            )),
            pay_remaining: Arc::new(PayRemainingService::new(
                guard.clone(),
                booking_query.clone(),
                booking_repo,
            )),
        },
        hub: HubUseCases {
            create: Arc::new(CreateHubService::new(guard.clone(), hub_repo.clone())),
            list: Arc::new(ListHubsService::new(guard.clone(), hub_query.clone())),
            get: Arc::new(GetHubService::new(guard.clone(), hub_query.clone())),
            update: Arc::new(UpdateHubService::new(
                guard.clone(),
                hub_query.clone(),
                hub_repo.clone(),
            )),
            delete: Arc::new(DeleteHubService::new(guard.clone(), hub_query, hub_repo)),
        },
        dashboard: DashboardUseCases {
            get: Arc::new(GetDashboardService::new(
                guard.clone(),
                bike_query,
                booking_query,
            )),
        },
        payment: PaymentUseCases {
            create_order: Arc::new(CreateOrderService::new(
                guard,
                gateway,
                gateway_config.order_settings(),
            )),
        },
    };

    info!(address = %server_url, "HTTP server listening");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as user;
    use crate::bike::adapter::incoming::web::routes as bike;
    use crate::booking::adapter::incoming::web::routes as booking;
    use crate::dashboard::adapter::incoming::web::routes as dashboard;
    use crate::hub::adapter::incoming::web::routes as hub;
    use crate::payment::adapter::incoming::web::routes as payment;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(user::register_user_handler);
    cfg.service(user::login_user_handler);
    cfg.service(user::refresh_token_handler);
    cfg.service(user::fetch_profile_handler);
    cfg.service(user::change_role_handler);
    cfg.service(user::update_image_handler);
    cfg.service(user::list_users_handler);
    cfg.service(user::toggle_block_user_handler);
    cfg.service(user::delete_user_handler);
    // Bikes
    cfg.service(bike::list_bikes_handler);
    cfg.service(bike::get_bike_handler);
    cfg.service(bike::add_bike_handler);
    cfg.service(bike::owner_bikes_handler);
    cfg.service(bike::update_bike_handler);
    cfg.service(bike::toggle_bike_handler);
    cfg.service(bike::delete_bike_handler);
    // Bookings
    cfg.service(booking::check_availability_handler);
    cfg.service(booking::check_bike_handler);
    cfg.service(booking::create_booking_handler);
    cfg.service(booking::user_bookings_handler);
    cfg.service(booking::owner_bookings_handler);
    cfg.service(booking::change_status_handler);
    cfg.service(booking::pay_remaining_handler);
    // Hubs
    cfg.service(hub::list_hubs_handler);
    cfg.service(hub::create_hub_handler);
    cfg.service(hub::get_hub_handler);
    cfg.service(hub::update_hub_handler);
    cfg.service(hub::delete_hub_handler);
    // Owner dashboard
    cfg.service(dashboard::get_dashboard_handler);
    // Payments
    cfg.service(payment::create_order_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
