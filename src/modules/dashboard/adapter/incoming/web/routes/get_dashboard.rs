use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{access_error_response, AuthenticatedUser};
use crate::dashboard::application::domain::DashboardSummary;
use crate::dashboard::application::ports::incoming::use_cases::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/owner/dashboard",
    tag = "owner",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet and booking summary", body = inline(SuccessResponse<DashboardSummary>)),
        (status = 403, description = "Owner role required", body = ErrorResponse),
    )
)]
#[get("/api/owner/dashboard")]
pub async fn get_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dashboard.get.execute(user.user_id).await {
        Ok(summary) => ApiResponse::success(summary),
        Err(DashboardError::Access(e)) => access_error_response(&e),
        Err(DashboardError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "Failed to build dashboard");
            ApiResponse::internal_error()
        }
    }
}
