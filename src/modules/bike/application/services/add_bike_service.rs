use async_trait::async_trait;

use crate::auth::application::helpers::RoleGuard;
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::{
    incoming::use_cases::{AddBikeCommand, AddBikeUseCase, BikeError},
    outgoing::BikeRepository,
};

pub struct AddBikeService<R>
where
    R: BikeRepository + Send + Sync,
{
    guard: RoleGuard,
    repository: R,
}

impl<R> AddBikeService<R>
where
    R: BikeRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, repository: R) -> Self {
        Self { guard, repository }
    }
}

#[async_trait]
impl<R> AddBikeUseCase for AddBikeService<R>
where
    R: BikeRepository + Send + Sync,
{
    async fn execute(&self, command: AddBikeCommand) -> Result<Bike, BikeError> {
        let owner = command.owner();
        self.guard.require_owner(owner).await?;

        let bike = self
            .repository
            .create_bike(command.into_data())
            .await
            .map_err(|e| BikeError::RepositoryError(e.to_string()))?;

        tracing::info!("Owner {} listed bike {}", owner, bike.id);
        Ok(bike)
    }
}
