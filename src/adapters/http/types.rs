//! Wire types for the membership API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderResponse {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyResponse {
    pub verified: bool,
}

/// Body of `POST /payment/verify`, field names fixed by the gateway.
#[derive(Debug, Serialize)]
pub(crate) struct VerifyRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Error body shape: either a plain `message` or a FastAPI-style `detail`
/// which may be a string or a list of located issues.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Detail {
    Message(String),
    Issues(Vec<DetailIssue>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl DetailIssue {
    /// The field name is the last location segment, e.g.
    /// `["body", "email"]` -> `email`.
    pub fn field(&self) -> String {
        self.loc
            .last()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| "body".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_parses_string_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Email already registered"}"#).unwrap();
        assert!(matches!(body.detail, Some(Detail::Message(_))));
    }

    #[test]
    fn error_body_parses_issue_list() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#,
        )
        .unwrap();
        match body.detail {
            Some(Detail::Issues(issues)) => {
                assert_eq!(issues[0].field(), "email");
                assert!(issues[0].msg.contains("valid email"));
            }
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn error_body_tolerates_plain_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("boom"));
        assert!(body.detail.is_none());
    }
}
