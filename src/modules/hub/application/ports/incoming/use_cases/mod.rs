pub mod hub_error;
pub mod manage_hub;

pub use hub_error::HubError;
pub use manage_hub::{
    CreateHubCommand, CreateHubInput, CreateHubUseCase, DeleteHubUseCase, GetHubUseCase,
    ListHubsUseCase, UpdateHubCommand, UpdateHubInput, UpdateHubUseCase,
};
