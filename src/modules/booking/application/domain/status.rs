use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot change a booking from {from} to {to}")]
    NotAllowed { from: &'static str, to: &'static str },
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Cancelled bookings no longer hold their window
    pub fn is_live(&self) -> bool {
        *self != BookingStatus::Cancelled
    }

    /// Returns `Ok(false)` when `next` equals the current status
    pub fn transition_to(self, next: BookingStatus) -> Result<bool, TransitionError> {
        use BookingStatus::*;

        match (self, next) {
            (a, b) if a == b => Ok(false),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled) => Ok(true),
            (from, to) => Err(TransitionError::NotAllowed {
                from: from.as_str(),
                to: to.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "unpaid" => Some(PaymentStatus::Unpaid),
            "partial" => Some(PaymentStatus::Partial),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    /// Status implied by a paid/price split. Never yields `Refunded`.
    pub fn from_split(paid: i64, price: i64) -> Self {
        if paid <= 0 {
            PaymentStatus::Unpaid
        } else if paid < price {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Paid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Offline,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Offline => "offline",
            PaymentMethod::Online => "online",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "online" => PaymentMethod::Online,
            _ => PaymentMethod::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BookingStatus::*;

    #[test]
    fn allowed_transitions() {
        assert_eq!(Pending.transition_to(Confirmed), Ok(true));
        assert_eq!(Pending.transition_to(Cancelled), Ok(true));
        assert_eq!(Confirmed.transition_to(Cancelled), Ok(true));
    }

    #[test]
    fn same_status_is_a_no_op() {
        for s in [Pending, Confirmed, Cancelled] {
            assert_eq!(s.transition_to(s), Ok(false));
        }
    }

    #[test]
    fn cancelled_is_terminal_and_confirmed_cannot_go_back() {
        assert!(Cancelled.transition_to(Pending).is_err());
        assert!(Cancelled.transition_to(Confirmed).is_err());
        assert!(Confirmed.transition_to(Pending).is_err());
    }

    #[test]
    fn payment_status_follows_split() {
        assert_eq!(PaymentStatus::from_split(0, 300), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::from_split(100, 300), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::from_split(300, 300), PaymentStatus::Paid);
    }

    #[test]
    fn db_round_trip_of_names() {
        for s in [Pending, Confirmed, Cancelled] {
            assert_eq!(BookingStatus::from_db(s.as_str()), Some(s));
        }
        assert_eq!(BookingStatus::from_db("archived"), None);
        assert_eq!(PaymentMethod::from_db("cash"), PaymentMethod::Offline);
    }
}
