use crate::auth::application::helpers::AccessError;
use crate::hub::application::domain::entities::HubValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HubError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Validation(#[from] HubValidationError),

    #[error("Hub not found")]
    NotFound,

    #[error("Hub belongs to another owner")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
