//! Payment domain types.
//!
//! - `order` - Gateway order descriptor and checkout request
//! - `outcome` - Checkout widget result
//! - `phase` - Submission protocol state machine

mod order;
mod outcome;
mod phase;

pub use order::{CheckoutPrefill, CheckoutRequest, PaymentOrder};
pub use outcome::{CheckoutOutcome, CompletedPayment};
pub use phase::SubmissionPhase;
