pub mod bike_query_postgres;
pub mod bike_repository_postgres;
pub mod sea_orm_entity;

pub use bike_query_postgres::BikeQueryPostgres;
pub use bike_repository_postgres::BikeRepositoryPostgres;
