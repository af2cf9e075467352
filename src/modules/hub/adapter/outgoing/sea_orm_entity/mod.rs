pub mod hubs;
