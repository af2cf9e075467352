pub mod bike_query;
pub mod bike_repository;

pub use bike_query::{BikeQuery, BikeQueryError};
pub use bike_repository::{BikePatch, BikeRepository, BikeRepositoryError, CreateBikeData};
