use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::booking::application::domain::{Booking, BookingStatus};
use crate::booking::application::ports::{
    incoming::use_cases::{BookingError, ChangeBookingStatusUseCase},
    outgoing::{BookingQuery, BookingRepository, BookingRepositoryError},
};

pub struct ChangeBookingStatusService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    guard: RoleGuard,
    bookings: Q,
    repository: R,
}

impl<Q, R> ChangeBookingStatusService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, bookings: Q, repository: R) -> Self {
        Self {
            guard,
            bookings,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> ChangeBookingStatusUseCase for ChangeBookingStatusService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, BookingError> {
        self.guard.require_owner(caller).await?;

        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?
            .ok_or(BookingError::NotFound)?;

        if booking.owner_id != caller {
            tracing::warn!(
                "User {} tried to change status of booking {} owned by {}",
                caller,
                booking_id,
                booking.owner_id
            );
            return Err(BookingError::Forbidden);
        }

        if !booking.status.transition_to(status)? {
            return Ok(booking);
        }

        let ledger = match status {
            BookingStatus::Cancelled => booking.ledger().cancel(),
            _ => booking.ledger(),
        };

        let updated = self
            .repository
            .update_status(booking_id, status, ledger)
            .await
            .map_err(|e| match e {
                BookingRepositoryError::NotFound => BookingError::NotFound,
                other => BookingError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            "Booking {} moved from {} to {} (payment {})",
            booking_id,
            booking.status.as_str(),
            updated.status.as_str(),
            updated.payment_status.as_str()
        );
        Ok(updated)
    }
}
