use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::bike::application::domain::entities::{Bike, BikeSummary};
use crate::booking::application::domain::{
    Booking, BookingStatus, BookingView, PaymentMethod, PaymentStatus, RenterSummary,
};
use crate::dashboard::application::domain::DashboardSummary;
use crate::hub::application::domain::entities::{Hub, HubStatus};
use crate::payment::application::domain::PaymentOrder;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bike Rental API",
        version = "1.0.0",
        description = "Marketplace backend: bike catalog, availability, bookings, hubs and payments"
    ),
    paths(
        // Accounts
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_role_handler,
        crate::auth::adapter::incoming::web::routes::update_image_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::toggle_block_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,

        // Bikes
        crate::bike::adapter::incoming::web::routes::list_bikes_handler,
        crate::bike::adapter::incoming::web::routes::get_bike_handler,
        crate::bike::adapter::incoming::web::routes::add_bike_handler,
        crate::bike::adapter::incoming::web::routes::owner_bikes_handler,
        crate::bike::adapter::incoming::web::routes::update_bike_handler,
        crate::bike::adapter::incoming::web::routes::toggle_bike_handler,
        crate::bike::adapter::incoming::web::routes::delete_bike_handler,

        // Bookings
        crate::booking::adapter::incoming::web::routes::check_availability_handler,
        crate::booking::adapter::incoming::web::routes::check_bike_handler,
        crate::booking::adapter::incoming::web::routes::create_booking_handler,
        crate::booking::adapter::incoming::web::routes::user_bookings_handler,
        crate::booking::adapter::incoming::web::routes::owner_bookings_handler,
        crate::booking::adapter::incoming::web::routes::change_status_handler,
        crate::booking::adapter::incoming::web::routes::pay_remaining_handler,

        // Hubs
        crate::hub::adapter::incoming::web::routes::list_hubs_handler,
        crate::hub::adapter::incoming::web::routes::create_hub_handler,
        crate::hub::adapter::incoming::web::routes::get_hub_handler,
        crate::hub::adapter::incoming::web::routes::update_hub_handler,
        crate::hub::adapter::incoming::web::routes::delete_hub_handler,

        // Owner dashboard
        crate::dashboard::adapter::incoming::web::routes::get_dashboard_handler,

        // Payments
        crate::payment::adapter::incoming::web::routes::create_order_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            User,
            UserRole,
            Bike,
            BikeSummary,
            Booking,
            BookingView,
            BookingStatus,
            PaymentStatus,
            PaymentMethod,
            RenterSummary,
            Hub,
            HubStatus,
            DashboardSummary,
            PaymentOrder
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "user", description = "Registration, login and profile"),
        (name = "owner", description = "Owner fleet, dashboard and user management"),
        (name = "bikes", description = "Public bike catalog"),
        (name = "bookings", description = "Availability, checkout and booking lifecycle"),
        (name = "hubs", description = "Owner pickup hubs"),
        (name = "payment", description = "Payment gateway orders"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/user/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/user/register",
            "/api/bikes/{bike_id}",
            "/api/bookings/create",
            "/api/bookings/change-status",
            "/api/hubs/{hub_id}",
            "/api/owner/dashboard",
            "/api/payment/create-order",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
