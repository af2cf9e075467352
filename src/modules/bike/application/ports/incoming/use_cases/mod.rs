pub mod add_bike;
pub mod bike_catalog;
pub mod bike_error;
pub mod manage_bike;

pub use add_bike::{AddBikeCommand, AddBikeInput, AddBikeUseCase};
pub use bike_catalog::{GetBikeUseCase, ListBikesUseCase};
pub use bike_error::BikeError;
pub use manage_bike::{
    DeleteBikeUseCase, ListOwnerBikesUseCase, ToggleBikeAvailabilityUseCase, UpdateBikeCommand,
    UpdateBikeInput, UpdateBikeUseCase,
};
