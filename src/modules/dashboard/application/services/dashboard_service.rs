use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::bike::application::ports::outgoing::BikeQuery;
use crate::booking::application::ports::outgoing::BookingQuery;
use crate::dashboard::application::domain::{summarize, DashboardSummary};
use crate::dashboard::application::ports::incoming::use_cases::{
    DashboardError, GetDashboardUseCase,
};

pub struct GetDashboardService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    guard: RoleGuard,
    bikes: B,
    bookings: Q,
}

impl<B, Q> GetDashboardService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, bikes: B, bookings: Q) -> Self {
        Self {
            guard,
            bikes,
            bookings,
        }
    }
}

#[async_trait]
impl<B, Q> GetDashboardUseCase for GetDashboardService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<DashboardSummary, DashboardError> {
        self.guard.require_owner(owner).await?;

        let total_bikes = self
            .bikes
            .count_by_owner(owner)
            .await
            .map_err(|e| DashboardError::RepositoryError(e.to_string()))?;
        let bookings = self
            .bookings
            .list_by_owner(owner)
            .await
            .map_err(|e| DashboardError::RepositoryError(e.to_string()))?;

        Ok(summarize(total_bikes, bookings, Utc::now()))
    }
}
