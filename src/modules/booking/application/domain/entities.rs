use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ledger::PaymentLedger;
use super::slot::BookingWindow;
use super::status::{BookingStatus, PaymentMethod, PaymentStatus};
use crate::auth::application::domain::entities::{User, UserId};
use crate::bike::application::domain::entities::BikeSummary;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub bike_id: Uuid,
    pub user_id: UserId,
    pub owner_id: UserId,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    #[schema(example = "09:00")]
    pub pickup_slot: String,
    #[schema(example = "18:00")]
    pub return_slot: String,
    pub pickup_at: NaiveDateTime,
    pub return_at: NaiveDateTime,
    pub total_hours: i32,
    pub price: i64,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub paid_amount: i64,
    pub pending_amount: i64,
    pub payment_status: PaymentStatus,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn ledger(&self) -> PaymentLedger {
        PaymentLedger::restore(
            self.price,
            self.paid_amount,
            self.pending_amount,
            self.payment_status,
        )
    }

    pub fn apply_ledger(&mut self, ledger: PaymentLedger) {
        self.paid_amount = ledger.paid();
        self.pending_amount = ledger.pending();
        self.payment_status = ledger.status();
    }

    /// True when this booking still holds part of `window`
    pub fn blocks(&self, window: &BookingWindow) -> bool {
        self.status.is_live() && window.overlaps(self.pickup_at, self.return_at)
    }
}

/// Renter as shown to the bike's owner
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RenterSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl From<&User> for RenterSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        }
    }
}

/// Booking enriched for listings. `bike`/`user` are absent when the row
/// they point to can no longer be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub bike: Option<BikeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<RenterSummary>,
}
