pub mod hub_query;
pub mod hub_repository;

pub use hub_query::{HubQuery, HubQueryError};
pub use hub_repository::{CreateHubData, HubPatch, HubRepository, HubRepositoryError};
