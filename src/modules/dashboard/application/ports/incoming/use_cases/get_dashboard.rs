use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::AccessError;
use crate::dashboard::application::domain::DashboardSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<DashboardSummary, DashboardError>;
}
