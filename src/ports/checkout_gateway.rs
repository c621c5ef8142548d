//! Checkout gateway port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::{CheckoutOutcome, CheckoutRequest};

/// Errors opening the checkout widget at all. Outcomes of an opened widget
/// (failure, dismissal) are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The widget script could not be loaded.
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Port for the third-party checkout widget.
///
/// `open` is the protocol's one externally-paced suspension point: it
/// resolves only when the widget reports success, failure, or dismissal,
/// which may be seconds to minutes later.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn open(&self, request: CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError>;
}
