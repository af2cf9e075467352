use actix_web::{get, web, Responder};

use super::map_bike_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::bike::application::domain::entities::Bike;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every bike the calling owner has listed, available or not
#[utoipa::path(
    get,
    path = "/api/owner/bikes",
    tag = "owner",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Owner's bikes", body = inline(SuccessResponse<Vec<Bike>>)),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[get("/api/owner/bikes")]
pub async fn owner_bikes_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.bike.list_owned.execute(user.user_id).await {
        Ok(bikes) => ApiResponse::success(bikes),
        Err(e) => map_bike_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::helpers::RoleGuard;
    use crate::bike::application::services::ListOwnerBikesService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::{bike, user_row};
    use crate::tests::support::stubs::{InMemoryBikeStore, InMemoryUserQuery};
    use actix_web::{test, App};
    use std::sync::Arc;
    use uuid::Uuid;

    #[actix_web::test]
    async fn returns_only_callers_bikes() {
        let caller = Uuid::new_v4();
        let mut parked = bike(UserId::from(caller), 300);
        parked.is_available = false;
        let store = InMemoryBikeStore::with_bikes(vec![
            bike(UserId::from(caller), 300),
            parked,
            bike(UserId::from(Uuid::new_v4()), 300),
        ]);
        let guard = RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![user_row(
            caller,
            UserRole::Owner,
        )])));
        let state = TestAppStateBuilder::default()
            .with_owner_bikes(ListOwnerBikesService::new(guard, store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(owner_bikes_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/owner/bikes")
            .insert_header(bearer(caller))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(owner_bikes_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/owner/bikes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
