//! Errors shared by the HTTP-backed ports.

use thiserror::Error;

/// One entry of a structured validation error list from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Errors from the registration/payment API.
///
/// The taxonomy mirrors how failures are surfaced to the user: conflicts
/// are terminal for the attempt, validation errors point at fields, and
/// network/server errors are retryable at the failed sub-step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connectivity failure; the same sub-step may be retried.
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP 409 - typically "Email already registered". Terminal for the
    /// attempt; the user must change their input.
    #[error("{message}")]
    Conflict { message: String },

    /// Structured field-level validation errors from the API.
    #[error("Validation failed: {}", format_issues(.0))]
    Validation(Vec<FieldIssue>),

    /// Any other non-success HTTP response.
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    /// Whether re-invoking the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_and_server_errors_are_retryable() {
        assert!(ApiError::Network("timeout".to_string()).is_retryable());
        assert!(ApiError::Http {
            status: 503,
            message: "unavailable".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn conflict_and_validation_are_terminal() {
        assert!(!ApiError::Conflict {
            message: "Email already registered".to_string()
        }
        .is_retryable());
        assert!(!ApiError::Validation(vec![]).is_retryable());
        assert!(!ApiError::Http {
            status: 400,
            message: "bad request".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn conflict_displays_the_server_message_verbatim() {
        let err = ApiError::Conflict {
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn validation_lists_field_issues() {
        let err = ApiError::Validation(vec![FieldIssue {
            field: "email".to_string(),
            message: "value is not a valid email address".to_string(),
        }]);
        assert!(err.to_string().contains("email"));
    }
}
