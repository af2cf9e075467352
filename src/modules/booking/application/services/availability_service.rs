use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::outgoing::BikeQuery;
use crate::booking::application::domain::{Booking, BookingWindow};
use crate::booking::application::ports::{
    incoming::use_cases::{BookingError, CheckBikeAvailabilityUseCase, SearchAvailableBikesUseCase},
    outgoing::BookingQuery,
};

/// Ids of bikes that have a live booking overlapping `window`
pub(crate) fn blocked_bikes(bookings: &[Booking], window: &BookingWindow) -> HashSet<Uuid> {
    bookings
        .iter()
        .filter(|b| b.blocks(window))
        .map(|b| b.bike_id)
        .collect()
}

pub(crate) async fn live_bookings<Q>(
    bookings: &Q,
    bike_ids: &[Uuid],
    window: &BookingWindow,
) -> Result<Vec<Booking>, BookingError>
where
    Q: BookingQuery + Send + Sync,
{
    bookings
        .list_live_for_bikes(bike_ids, window.pickup_at())
        .await
        .map_err(|e| BookingError::RepositoryError(e.to_string()))
}

pub struct CheckBikeAvailabilityService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    bikes: B,
    bookings: Q,
}

impl<B, Q> CheckBikeAvailabilityService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    pub fn new(bikes: B, bookings: Q) -> Self {
        Self { bikes, bookings }
    }
}

#[async_trait]
impl<B, Q> CheckBikeAvailabilityUseCase for CheckBikeAvailabilityService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    async fn execute(&self, bike_id: Uuid, window: BookingWindow) -> Result<bool, BookingError> {
        let bike = self
            .bikes
            .find_by_id(bike_id)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?
            .filter(|b| b.owner_id.is_some())
            .ok_or(BookingError::BikeNotFound)?;

        if !bike.is_listed() {
            return Ok(false);
        }

        let live = live_bookings(&self.bookings, &[bike_id], &window).await?;
        Ok(blocked_bikes(&live, &window).is_empty())
    }
}

pub struct SearchAvailableBikesService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    bikes: B,
    bookings: Q,
}

impl<B, Q> SearchAvailableBikesService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    pub fn new(bikes: B, bookings: Q) -> Self {
        Self { bikes, bookings }
    }
}

#[async_trait]
impl<B, Q> SearchAvailableBikesUseCase for SearchAvailableBikesService<B, Q>
where
    B: BikeQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
{
    async fn execute(
        &self,
        location: String,
        window: BookingWindow,
    ) -> Result<Vec<Bike>, BookingError> {
        let candidates = self
            .bikes
            .list_listed_by_location(&location)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?;

        if candidates.is_empty() {
            return Ok(candidates);
        }

        let ids: Vec<Uuid> = candidates.iter().map(|b| b.id).collect();
        let live = live_bookings(&self.bookings, &ids, &window).await?;
        let blocked = blocked_bikes(&live, &window);

        tracing::debug!(
            "Availability search in {}: {} candidates, {} blocked",
            location,
            candidates.len(),
            blocked.len()
        );

        Ok(candidates
            .into_iter()
            .filter(|b| !blocked.contains(&b.id))
            .collect())
    }
}
