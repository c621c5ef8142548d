//! Gateway order descriptor and the checkout invocation payload.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrderId;

/// Order descriptor issued by `/payment/order`.
///
/// Created at most once per registration; a stored order is reused on retry
/// rather than recreated. `amount` is in minor currency units (paise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub order_id: OrderId,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
}

impl PaymentOrder {
    /// Amount in whole rupees, for display.
    pub fn amount_inr(&self) -> u64 {
        self.amount / 100
    }
}

/// Contact details prefilled into the checkout widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Everything the checkout widget needs to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub order_id: OrderId,
    pub description: String,
    pub prefill: CheckoutPrefill,
}

impl CheckoutRequest {
    /// Builds the widget invocation from a stored order and the selection's
    /// display title.
    pub fn from_order(order: &PaymentOrder, title: &str, prefill: CheckoutPrefill) -> Self {
        Self {
            key: order.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            order_id: order.order_id.clone(),
            description: format!("{} - Annual Membership", title),
            prefill,
        }
    }
}
