use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_bike_error;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Detaches the bike from its owner. Past bookings keep pointing at the row.
#[utoipa::path(
    delete,
    path = "/api/owner/bikes/{bike_id}",
    tag = "owner",
    security(("bearer_auth" = [])),
    params(("bike_id" = Uuid, Path, description = "Bike id")),
    responses(
        (status = 204, description = "Bike removed"),
        (status = 403, description = "Not the bike's owner", body = ErrorResponse),
        (status = 404, description = "Unknown bike", body = ErrorResponse),
    )
)]
#[delete("/api/owner/bikes/{bike_id}")]
pub async fn delete_bike_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.bike.delete.execute(user.user_id, path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_bike_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::helpers::RoleGuard;
    use crate::bike::application::services::DeleteBikeService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::{bike, user_row};
    use crate::tests::support::stubs::{InMemoryBikeStore, InMemoryUserQuery};
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn delete_detaches_then_second_delete_is_not_found() {
        let caller = Uuid::new_v4();
        let b = bike(UserId::from(caller), 400);
        let store = InMemoryBikeStore::with_bikes(vec![b.clone()]);
        let guard = RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![user_row(
            caller,
            UserRole::Owner,
        )])));
        let state = TestAppStateBuilder::default()
            .with_delete_bike(DeleteBikeService::new(guard, store.clone(), store.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_bike_handler),
        )
        .await;

        let uri = format!("/api/owner/bikes/{}", b.id);
        let first = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&uri)
                .insert_header(bearer(caller))
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), 204);
        assert!(store.get(b.id).unwrap().owner_id.is_none());

        let second = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&uri)
                .insert_header(bearer(caller))
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), 404);
    }
}
