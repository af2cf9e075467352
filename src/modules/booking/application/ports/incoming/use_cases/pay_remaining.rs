use async_trait::async_trait;
use uuid::Uuid;

use super::BookingError;
use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{Booking, LedgerError};

#[derive(Debug, Clone)]
pub struct PayRemainingCommand {
    booking_id: Uuid,
    amount: i64,
    gateway_payment_id: Option<String>,
}

impl PayRemainingCommand {
    pub fn new(
        booking_id: Uuid,
        amount: i64,
        gateway_payment_id: Option<String>,
    ) -> Result<Self, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount);
        }

        Ok(Self {
            booking_id,
            amount,
            gateway_payment_id: gateway_payment_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        })
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn gateway_payment_id(&self) -> Option<&str> {
        self.gateway_payment_id.as_deref()
    }

    pub fn into_gateway_payment_id(self) -> Option<String> {
        self.gateway_payment_id
    }
}

/// Settles part or all of the pending amount. A gateway payment id equal to
/// the last recorded one is rejected as a duplicate; earlier ids are not
/// remembered, so this is not full idempotency.
#[async_trait]
pub trait PayRemainingUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        command: PayRemainingCommand,
    ) -> Result<Booking, BookingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_rejected() {
        assert_eq!(
            PayRemainingCommand::new(Uuid::new_v4(), 0, None).unwrap_err(),
            LedgerError::NonPositiveAmount
        );
    }

    #[test]
    fn blank_payment_id_is_dropped() {
        let cmd = PayRemainingCommand::new(Uuid::new_v4(), 10, Some("   ".into())).unwrap();

        assert_eq!(cmd.gateway_payment_id(), None);
    }
}
