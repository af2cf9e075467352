use crate::auth::application::helpers::AccessError;
use crate::bike::application::domain::entities::BikeValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BikeError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Validation(#[from] BikeValidationError),

    #[error("Bike not found")]
    NotFound,

    #[error("Bike belongs to another owner")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
