//! Completed-application log port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{OrderId, PaymentId, UserId};

/// One completed submission, kept as a client-side backup only; the server
/// remains the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedApplication {
    pub name: String,
    pub email: String,
    pub stakeholder: String,
    pub price_inr: u64,
    pub user_id: UserId,
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Errors from the application log. Callers treat the log as best-effort
/// and never fail a submission over it.
#[derive(Debug, Error)]
pub enum ApplicationLogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to encode record: {0}")]
    Encode(String),
}

/// Port for the durable local log of completed applications.
pub trait ApplicationLog: Send + Sync {
    /// Appends a completed application record.
    fn append(&self, record: CompletedApplication) -> Result<(), ApplicationLogError>;

    /// Returns all recorded applications, oldest first.
    fn all(&self) -> Result<Vec<CompletedApplication>, ApplicationLogError>;
}
