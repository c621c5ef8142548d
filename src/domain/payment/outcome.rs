//! Checkout widget result, modelled as a plain value.
//!
//! The widget's callback/dismiss contract collapses into a single awaited
//! outcome; duplicate deliveries are the orchestrator's concern.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, PaymentId};

/// Signed fields reported by the widget on success, forwarded verbatim to
/// `/payment/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPayment {
    pub order_id: OrderId,
    pub payment_id: PaymentId,
    pub signature: String,
}

/// How a checkout interaction ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// The widget reported success; verification is still required.
    Completed(CompletedPayment),

    /// The gateway reported a payment failure.
    Failed { reason: String },

    /// The user closed the widget without paying.
    Dismissed,
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed(_))
    }
}
