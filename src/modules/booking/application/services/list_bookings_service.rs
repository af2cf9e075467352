use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::bike::application::domain::entities::BikeSummary;
use crate::bike::application::ports::outgoing::BikeQuery;
use crate::booking::application::domain::{Booking, BookingView, RenterSummary};
use crate::booking::application::ports::{
    incoming::use_cases::{BookingError, ListOwnerBookingsUseCase, ListUserBookingsUseCase},
    outgoing::BookingQuery,
};

fn distinct<F>(bookings: &[Booking], key: F) -> Vec<Uuid>
where
    F: Fn(&Booking) -> Uuid,
{
    let set: HashSet<Uuid> = bookings.iter().map(key).collect();
    set.into_iter().collect()
}

async fn bike_summaries<B>(
    bikes: &B,
    bookings: &[Booking],
) -> Result<HashMap<Uuid, BikeSummary>, BookingError>
where
    B: BikeQuery + Send + Sync,
{
    let ids = distinct(bookings, |b| b.bike_id);
    let found = bikes
        .find_by_ids(&ids)
        .await
        .map_err(|e| BookingError::RepositoryError(e.to_string()))?;

    Ok(found.iter().map(|b| (b.id, BikeSummary::from(b))).collect())
}

pub struct ListUserBookingsService<Q, B>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
{
    guard: RoleGuard,
    bookings: Q,
    bikes: B,
}

impl<Q, B> ListUserBookingsService<Q, B>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, bookings: Q, bikes: B) -> Self {
        Self {
            guard,
            bookings,
            bikes,
        }
    }
}

#[async_trait]
impl<Q, B> ListUserBookingsUseCase for ListUserBookingsService<Q, B>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<Vec<BookingView>, BookingError> {
        self.guard.require_active(caller).await?;

        let bookings = self
            .bookings
            .list_by_user(caller)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?;
        let bikes = bike_summaries(&self.bikes, &bookings).await?;

        Ok(bookings
            .into_iter()
            .map(|booking| BookingView {
                bike: bikes.get(&booking.bike_id).cloned(),
                booking,
                user: None,
            })
            .collect())
    }
}

pub struct ListOwnerBookingsService<Q, B, U>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    guard: RoleGuard,
    bookings: Q,
    bikes: B,
    users: U,
}

impl<Q, B, U> ListOwnerBookingsService<Q, B, U>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(guard: RoleGuard, bookings: Q, bikes: B, users: U) -> Self {
        Self {
            guard,
            bookings,
            bikes,
            users,
        }
    }
}

#[async_trait]
impl<Q, B, U> ListOwnerBookingsUseCase for ListOwnerBookingsService<Q, B, U>
where
    Q: BookingQuery + Send + Sync,
    B: BikeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, caller: UserId) -> Result<Vec<BookingView>, BookingError> {
        self.guard.require_owner(caller).await?;

        let bookings = self
            .bookings
            .list_by_owner(caller)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?;
        let bikes = bike_summaries(&self.bikes, &bookings).await?;

        let renter_ids = distinct(&bookings, |b| b.user_id.value());
        let renters: HashMap<UserId, RenterSummary> = self
            .users
            .find_by_ids(&renter_ids)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?
            .iter()
            .map(|row| {
                let user = row.to_user();
                (user.id, RenterSummary::from(&user))
            })
            .collect();

        Ok(bookings
            .into_iter()
            .map(|booking| BookingView {
                bike: bikes.get(&booking.bike_id).cloned(),
                user: renters.get(&booking.user_id).cloned(),
                booking,
            })
            .collect())
    }
}
