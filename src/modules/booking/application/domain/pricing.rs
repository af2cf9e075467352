use super::slot::{BookingWindow, WindowError};

pub const HOURS_PER_DAY: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub total_hours: i64,
    pub billable_days: i64,
    pub price: i64,
}

fn div_ceil(n: i64, d: i64) -> i64 {
    (n + d - 1) / d
}

/// Hourly rate applies to rentals shorter than a day when the bike has one;
/// everything else is billed per started day.
pub fn quote(
    window: &BookingWindow,
    price_per_day: i64,
    price_per_hour: Option<i64>,
) -> Result<Quote, WindowError> {
    let minutes = (window.return_at() - window.pickup_at()).num_minutes();
    debug_assert!(minutes > 0, "window must end after it starts");
    let total_hours = div_ceil(minutes, 60);
    let billable_days = div_ceil(total_hours, HOURS_PER_DAY);

    let price = match price_per_hour {
        Some(rate) if total_hours < HOURS_PER_DAY => total_hours.checked_mul(rate),
        _ => billable_days.checked_mul(price_per_day),
    }
    .ok_or(WindowError::PriceOverflow)?;

    Ok(Quote {
        total_hours,
        billable_days,
        price,
    })
}
