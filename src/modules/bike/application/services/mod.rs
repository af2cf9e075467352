pub mod add_bike_service;
pub mod bike_catalog_service;
pub mod manage_bike_service;

pub use add_bike_service::AddBikeService;
pub use bike_catalog_service::{GetBikeService, ListBikesService};
pub use manage_bike_service::{
    DeleteBikeService, ListOwnerBikesService, ToggleBikeAvailabilityService, UpdateBikeService,
};
