pub mod entities;
pub mod ledger;
pub mod pricing;
pub mod slot;
pub mod status;

pub use entities::{Booking, BookingView, RenterSummary};
pub use ledger::{LedgerError, PaymentLedger};
pub use pricing::{quote, Quote};
pub use slot::{BookingWindow, TimeSlot, WindowError};
pub use status::{BookingStatus, PaymentMethod, PaymentStatus, TransitionError};
