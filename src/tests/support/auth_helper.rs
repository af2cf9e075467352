use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::stubs::StubTokenProvider;

/// Token provider as the `AuthenticatedUser` extractor looks it up
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider::default());
    web::Data::new(provider)
}

pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer access:{user_id}"))
}

pub fn refresh_bearer(user_id: Uuid) -> (&'static str, String) {
    ("Authorization", format!("Bearer refresh:{user_id}"))
}
