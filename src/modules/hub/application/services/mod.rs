pub mod hub_service;

pub use hub_service::{
    CreateHubService, DeleteHubService, GetHubService, ListHubsService, UpdateHubService,
};
