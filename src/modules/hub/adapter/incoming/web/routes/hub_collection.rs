use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::map_hub_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hub::application::domain::entities::{Hub, HubStatus};
use crate::hub::application::ports::incoming::use_cases::{CreateHubCommand, CreateHubInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateHubRequestDto {
    #[schema(example = "Indiranagar Hub")]
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[schema(example = 10)]
    pub capacity: Option<i32>,
    pub status: Option<HubStatus>,
    /// Defaults to 09:00
    #[schema(example = "09:00")]
    pub open_time: Option<String>,
    /// Defaults to 18:00
    #[schema(example = "18:00")]
    pub close_time: Option<String>,
}

impl From<CreateHubRequestDto> for CreateHubInput {
    fn from(dto: CreateHubRequestDto) -> Self {
        CreateHubInput {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            pincode: dto.pincode,
            phone: dto.phone,
            email: dto.email,
            capacity: dto.capacity,
            status: dto.status,
            open_time: dto.open_time,
            close_time: dto.close_time,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/hubs",
    tag = "hubs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's hubs", body = inline(SuccessResponse<Vec<Hub>>)),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[get("/api/hubs")]
pub async fn list_hubs_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.hub.list.execute(user.user_id).await {
        Ok(hubs) => ApiResponse::success(hubs),
        Err(e) => map_hub_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/hubs",
    tag = "hubs",
    security(("bearer_auth" = [])),
    request_body = CreateHubRequestDto,
    responses(
        (status = 201, description = "Hub created", body = inline(SuccessResponse<Hub>)),
        (status = 400, description = "Invalid hub", body = ErrorResponse),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[post("/api/hubs")]
pub async fn create_hub_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateHubRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateHubCommand::new(user.user_id, req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.hub.create.execute(command).await {
        Ok(hub) => ApiResponse::created(hub),
        Err(e) => map_hub_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::helpers::RoleGuard;
    use crate::hub::application::services::{CreateHubService, ListHubsService};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::fixtures::{hub, user_row};
    use crate::tests::support::stubs::{InMemoryHubStore, InMemoryUserQuery};
    use actix_web::{test, App};
    use std::sync::Arc;
    use uuid::Uuid;

    fn owner_guard(id: Uuid) -> RoleGuard {
        RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![user_row(
            id,
            UserRole::Owner,
        )])))
    }

    #[actix_web::test]
    async fn create_then_list() {
        let caller = Uuid::new_v4();
        let store = InMemoryHubStore::default();
        let state = TestAppStateBuilder::default()
            .with_create_hub(CreateHubService::new(owner_guard(caller), store.clone()))
            .with_list_hubs(ListHubsService::new(owner_guard(caller), store.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(create_hub_handler)
                .service(list_hubs_handler),
        )
        .await;

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/hubs")
                .insert_header(bearer(caller))
                .set_json(serde_json::json!({
                    "name": "Indiranagar Hub",
                    "address": "100 Feet Road",
                    "city": "Bengaluru",
                    "state": "Karnataka",
                    "pincode": "560038"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), 201);
        let json: serde_json::Value = test::read_body_json(created).await;
        assert_eq!(json["data"]["open_time"], "09:00");
        assert_eq!(json["data"]["status"], "active");

        let listed = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/hubs")
                .insert_header(bearer(caller))
                .to_request(),
        )
        .await;
        let json: serde_json::Value = test::read_body_json(listed).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn invalid_hours_are_rejected() {
        let caller = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_create_hub(CreateHubService::new(
                owner_guard(caller),
                InMemoryHubStore::default(),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(create_hub_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/hubs")
                .insert_header(bearer(caller))
                .set_json(serde_json::json!({
                    "name": "Night Hub",
                    "address": "Ring Road",
                    "city": "Delhi",
                    "state": "Delhi",
                    "pincode": "110001",
                    "open_time": "22:00",
                    "close_time": "06:00"
                }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn plain_user_cannot_list_hubs() {
        let caller = Uuid::new_v4();
        let guard = RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![user_row(
            caller,
            UserRole::User,
        )])));
        let store = InMemoryHubStore::with_hubs(vec![hub(UserId::from(caller))]);
        let state = TestAppStateBuilder::default()
            .with_list_hubs(ListHubsService::new(guard, store))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_hubs_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/hubs")
                .insert_header(bearer(caller))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 403);
    }
}
