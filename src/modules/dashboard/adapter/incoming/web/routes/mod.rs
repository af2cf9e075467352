mod get_dashboard;

pub use get_dashboard::{get_dashboard_handler, __path_get_dashboard_handler};
