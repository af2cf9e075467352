use actix_web::{post, web, Responder};

use super::map_profile_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upgrade the caller to the owner role
#[utoipa::path(
    post,
    path = "/api/owner/change-role",
    tag = "owner",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller is now an owner", body = inline(SuccessResponse<User>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/owner/change-role")]
pub async fn change_role_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.become_owner.execute(user.user_id).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_profile_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::ports::incoming::use_cases::{BecomeOwnerUseCase, ProfileError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::user_row;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct Promote;

    #[async_trait]
    impl BecomeOwnerUseCase for Promote {
        async fn execute(&self, caller: UserId) -> Result<User, ProfileError> {
            Ok(user_row(caller.value(), UserRole::Owner).to_user())
        }
    }

    #[actix_web::test]
    async fn caller_becomes_owner() {
        let state = TestAppStateBuilder::default().with_become_owner(Promote).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(change_role_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/owner/change-role")
            .insert_header(bearer(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["role"], "owner");
    }

    #[actix_web::test]
    async fn requires_token() {
        let state = TestAppStateBuilder::default().with_become_owner(Promote).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(change_role_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/owner/change-role")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
