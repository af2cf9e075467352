mod role_guard;

pub use role_guard::{AccessError, RoleGuard};
