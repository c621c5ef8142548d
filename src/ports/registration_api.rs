//! Registration API port.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::registration::RegistrationRequest;

use super::ApiError;

/// Port for the remote registration endpoint.
///
/// `register` must be treated as non-idempotent by callers: the
/// orchestrator persists the returned id and never registers the same
/// applicant twice.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submits the merged registration payload, returning the
    /// server-assigned user id.
    async fn register(&self, request: &RegistrationRequest) -> Result<UserId, ApiError>;
}
