pub mod domain;
pub mod hub_use_cases;
pub mod ports;
pub mod services;
