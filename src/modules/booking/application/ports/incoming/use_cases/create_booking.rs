use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::BookingError;
use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{Booking, BookingWindow, LedgerError, PaymentMethod};

#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    pub bike_id: Uuid,
    pub pickup_date: NaiveDate,
    pub pickup_slot: String,
    pub return_date: NaiveDate,
    pub return_slot: String,
    pub paid_amount: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
}

/// Checkout request with a validated window. The paid amount is checked
/// against the price once the bike is known.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub renter: UserId,
    pub bike_id: Uuid,
    pub window: BookingWindow,
    pub paid_amount: i64,
    pub payment_method: PaymentMethod,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateBookingCommand {
    pub fn new(renter: UserId, input: CreateBookingInput) -> Result<Self, BookingError> {
        let window = BookingWindow::new(
            input.pickup_date,
            &input.pickup_slot,
            input.return_date,
            &input.return_slot,
        )?;

        let paid_amount = input.paid_amount.unwrap_or(0);
        if paid_amount < 0 {
            return Err(LedgerError::NegativeAmount.into());
        }

        Ok(Self {
            renter,
            bike_id: input.bike_id,
            window,
            paid_amount,
            payment_method: input.payment_method.unwrap_or_default(),
            hub_id: input.hub_id,
            address: non_blank(input.address),
            phone: non_blank(input.phone),
            pickup_location: non_blank(input.pickup_location),
        })
    }
}

#[async_trait]
pub trait CreateBookingUseCase: Send + Sync {
    async fn execute(&self, command: CreateBookingCommand) -> Result<Booking, BookingError>;
}
