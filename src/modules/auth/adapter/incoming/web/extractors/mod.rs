mod auth;

pub use auth::{access_error_response, AuthenticatedUser};
