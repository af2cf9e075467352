pub mod auth;
pub mod bike;
pub mod booking;
pub mod dashboard;
pub mod hub;
pub mod payment;
