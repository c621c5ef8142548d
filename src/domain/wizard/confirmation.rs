//! Terminal confirmation data for the result page.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the success page waits before auto-navigating home. A manual
/// override control is always offered alongside.
pub const HOME_REDIRECT_DELAY: Duration = Duration::from_secs(5);

/// Minimal data carried to the success page.
///
/// Deliberately excludes payment ids and signatures: no payment secrets are
/// retained beyond the session once the wizard completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
    pub category_title: String,
}
