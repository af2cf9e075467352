pub mod domain;
pub mod payment_use_cases;
pub mod ports;
pub mod services;
