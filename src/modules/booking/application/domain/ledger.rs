use super::status::PaymentStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Paid amount {paid} exceeds price {price}")]
    PaidExceedsPrice { paid: i64, price: i64 },

    #[error("Payment amount must be positive")]
    NonPositiveAmount,

    #[error("Payment of {amount} exceeds the pending {pending}")]
    ExceedsPending { amount: i64, pending: i64 },

    #[error("Booking has been refunded")]
    Refunded,
}

/// Paid/pending split of a booking's price.
///
/// Outside of a refund, `paid + pending == price` always holds and the
/// status is derived from the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentLedger {
    price: i64,
    paid: i64,
    pending: i64,
    status: PaymentStatus,
}

impl PaymentLedger {
    pub fn open(price: i64, paid: i64) -> Result<Self, LedgerError> {
        if price < 0 || paid < 0 {
            return Err(LedgerError::NegativeAmount);
        }
        if paid > price {
            return Err(LedgerError::PaidExceedsPrice { paid, price });
        }

        Ok(Self {
            price,
            paid,
            pending: price - paid,
            status: PaymentStatus::from_split(paid, price),
        })
    }

    /// Rebuilds a ledger from stored columns without re-deriving anything
    pub fn restore(price: i64, paid: i64, pending: i64, status: PaymentStatus) -> Self {
        Self {
            price,
            paid,
            pending,
            status,
        }
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn paid(&self) -> i64 {
        self.paid
    }

    pub fn pending(&self) -> i64 {
        self.pending
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn is_balanced(&self) -> bool {
        self.status == PaymentStatus::Refunded || self.paid + self.pending == self.price
    }

    pub fn top_up(&self, amount: i64) -> Result<Self, LedgerError> {
        if self.status == PaymentStatus::Refunded {
            return Err(LedgerError::Refunded);
        }
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount);
        }
        if amount > self.pending {
            return Err(LedgerError::ExceedsPending {
                amount,
                pending: self.pending,
            });
        }

        let paid = self.paid + amount;
        Ok(Self {
            price: self.price,
            paid,
            pending: self.price - paid,
            status: PaymentStatus::from_split(paid, self.price),
        })
    }

    /// Cancellation: any collected money is marked refunded and nothing stays
    /// pending. An unpaid ledger is returned unchanged.
    pub fn cancel(&self) -> Self {
        match self.status {
            PaymentStatus::Partial | PaymentStatus::Paid => Self {
                pending: 0,
                status: PaymentStatus::Refunded,
                ..*self
            },
            _ => *self,
        }
    }
}
