pub mod hub_query_postgres;
pub mod hub_repository_postgres;
pub mod sea_orm_entity;

pub use hub_query_postgres::HubQueryPostgres;
pub use hub_repository_postgres::HubRepositoryPostgres;
