pub mod get_dashboard;

pub use get_dashboard::{DashboardError, GetDashboardUseCase};
