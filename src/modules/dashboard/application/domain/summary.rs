use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::booking::application::domain::{Booking, BookingStatus, PaymentStatus};

const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_bikes: u64,
    pub total_bookings: u64,
    pub pending_bookings: u64,
    pub confirmed_bookings: u64,
    pub cancelled_bookings: u64,
    pub recent_bookings: Vec<Booking>,
    /// Price of confirmed bookings created this calendar month (UTC)
    pub monthly_revenue: i64,
    /// Money actually held: paid amounts of bookings that were not refunded
    pub collected_amount: i64,
}

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Money totals saturate at `i64::MAX` rather than wrapping.
pub fn summarize(total_bikes: u64, mut bookings: Vec<Booking>, now: DateTime<Utc>) -> DashboardSummary {
    let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count() as u64;

    let pending_bookings = count(BookingStatus::Pending);
    let confirmed_bookings = count(BookingStatus::Confirmed);
    let cancelled_bookings = count(BookingStatus::Cancelled);

    let monthly_revenue = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed && same_month(b.created_at, now))
        .map(|b| b.price)
        .fold(0, i64::saturating_add);

    let collected_amount = bookings
        .iter()
        .filter(|b| b.payment_status != PaymentStatus::Refunded)
        .map(|b| b.paid_amount)
        .fold(0, i64::saturating_add);

    let total_bookings = bookings.len() as u64;

    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    bookings.truncate(RECENT_LIMIT);

    DashboardSummary {
        total_bikes,
        total_bookings,
        pending_bookings,
        confirmed_bookings,
        cancelled_bookings,
        recent_bookings: bookings,
        monthly_revenue,
        collected_amount,
    }
}
