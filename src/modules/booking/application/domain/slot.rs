use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("Invalid slot '{0}', expected a full hour such as 09:00")]
    InvalidSlot(String),

    #[error("Return must be after pickup")]
    ReturnNotAfterPickup,

    #[error("Rental window is too long")]
    TooLong,

    #[error("Rental price is out of range")]
    PriceOverflow,
}

/// A whole-hour slot, written `HH:00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u32);

impl TimeSlot {
    pub fn hour(&self) -> u32 {
        self.0
    }

    pub fn start(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.0, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeSlot {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WindowError::InvalidSlot(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;

        if hh.len() != 2 || mm != "00" || !hh.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hour: u32 = hh.parse().map_err(|_| invalid())?;
        if hour > 23 {
            return Err(invalid());
        }

        Ok(TimeSlot(hour))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Half-open `[a_start, a_end)` against `[b_start, b_end)`
pub fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// A validated pickup/return pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pickup_date: NaiveDate,
    pickup_slot: TimeSlot,
    return_date: NaiveDate,
    return_slot: TimeSlot,
}

impl BookingWindow {
    pub fn new(
        pickup_date: NaiveDate,
        pickup_slot: &str,
        return_date: NaiveDate,
        return_slot: &str,
    ) -> Result<Self, WindowError> {
        Self::from_slots(
            pickup_date,
            pickup_slot.trim().parse()?,
            return_date,
            return_slot.trim().parse()?,
        )
    }

    pub fn from_slots(
        pickup_date: NaiveDate,
        pickup_slot: TimeSlot,
        return_date: NaiveDate,
        return_slot: TimeSlot,
    ) -> Result<Self, WindowError> {
        let window = Self {
            pickup_date,
            pickup_slot,
            return_date,
            return_slot,
        };
        if window.return_at() <= window.pickup_at() {
            return Err(WindowError::ReturnNotAfterPickup);
        }
        Ok(window)
    }

    pub fn pickup_date(&self) -> NaiveDate {
        self.pickup_date
    }

    pub fn pickup_slot(&self) -> TimeSlot {
        self.pickup_slot
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    pub fn return_slot(&self) -> TimeSlot {
        self.return_slot
    }

    pub fn pickup_at(&self) -> NaiveDateTime {
        self.pickup_date.and_time(self.pickup_slot.start())
    }

    pub fn return_at(&self) -> NaiveDateTime {
        self.return_date.and_time(self.return_slot.start())
    }

    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        intervals_overlap(self.pickup_at(), self.return_at(), start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn slot_accepts_full_hours_only() {
        assert_eq!("00:00".parse::<TimeSlot>().unwrap().hour(), 0);
        assert_eq!("23:00".parse::<TimeSlot>().unwrap().hour(), 23);

        for bad in ["9:00", "9:30", "09:30", "24:00", "25:00", "ab:00", "0900", "", "+9:00"] {
            assert!(bad.parse::<TimeSlot>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn slot_displays_zero_padded() {
        assert_eq!("07:00".parse::<TimeSlot>().unwrap().to_string(), "07:00");
    }

    #[test]
    fn window_requires_return_after_pickup() {
        assert_eq!(
            BookingWindow::new(date(1), "10:00", date(1), "10:00"),
            Err(WindowError::ReturnNotAfterPickup)
        );
        assert_eq!(
            BookingWindow::new(date(2), "10:00", date(1), "18:00"),
            Err(WindowError::ReturnNotAfterPickup)
        );
        assert!(BookingWindow::new(date(1), "10:00", date(1), "11:00").is_ok());
    }

    #[test]
    fn window_combines_date_and_slot() {
        let w = BookingWindow::new(date(1), "09:00", date(3), "18:00").unwrap();

        assert_eq!(w.pickup_at(), date(1).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(w.return_at(), date(3).and_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn back_to_back_windows_do_not_overlap() {
        let morning = BookingWindow::new(date(1), "06:00", date(1), "10:00").unwrap();
        let later = BookingWindow::new(date(1), "10:00", date(1), "12:00").unwrap();

        assert!(!later.overlaps(morning.pickup_at(), morning.return_at()));
        assert!(!morning.overlaps(later.pickup_at(), later.return_at()));
    }

    #[test]
    fn partial_and_enclosing_windows_overlap() {
        let base = BookingWindow::new(date(1), "10:00", date(2), "10:00").unwrap();
        let tail = BookingWindow::new(date(2), "09:00", date(2), "12:00").unwrap();
        let inside = BookingWindow::new(date(1), "12:00", date(1), "13:00").unwrap();
        let around = BookingWindow::new(date(1), "00:00", date(3), "00:00").unwrap();

        for other in [tail, inside, around] {
            assert!(base.overlaps(other.pickup_at(), other.return_at()));
            assert!(other.overlaps(base.pickup_at(), base.return_at()));
        }
    }
}
