use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::RoleGuard;
use crate::booking::application::domain::{Booking, BookingStatus};
use crate::booking::application::ports::{
    incoming::use_cases::{BookingError, PayRemainingCommand, PayRemainingUseCase},
    outgoing::{BookingQuery, BookingRepository, BookingRepositoryError},
};

pub struct PayRemainingService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    guard: RoleGuard,
    bookings: Q,
    repository: R,
}

impl<Q, R> PayRemainingService<Q, R>
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
impl<Q, R> PayRemainingUseCase for PayRemainingService<Q, R>
where
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        command: PayRemainingCommand,
    ) -> Result<Booking, BookingError> {
        self.guard.require_active(caller).await?;

        let booking_id = command.booking_id();
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?
            .ok_or(BookingError::NotFound)?;

        if booking.user_id != caller {
            return Err(BookingError::Forbidden);
        }
        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::Cancelled);
        }

        if let Some(payment_id) = command.gateway_payment_id() {
            if booking.gateway_payment_id.as_deref() == Some(payment_id) {
                tracing::warn!(
                    "Duplicate payment {} submitted for booking {}",
                    payment_id,
                    booking_id
                );
                return Err(BookingError::DuplicatePayment(payment_id.to_string()));
            }
        }

        let amount = command.amount();
        let ledger = booking.ledger().top_up(amount)?;

        let updated = self
            .repository
            .record_payment(booking_id, ledger, command.into_gateway_payment_id())
            .await
            .map_err(|e| match e {
                BookingRepositoryError::NotFound => BookingError::NotFound,
                other => BookingError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            "Payment of {} recorded on booking {} (paid {}, pending {})",
            amount,
            booking_id,
            updated.paid_amount,
            updated.pending_amount
        );
        Ok(updated)
    }
}
