//! reqwest-backed client for the membership API.
//!
//! One client implements the `RegistrationApi`, `PaymentApi`, and
//! `SchemaProvider` ports; all three talk to the same service under the
//! `/api` base path.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::domain::foundation::{OrderId, UserId, ValidationError};
use crate::domain::payment::{CompletedPayment, PaymentOrder};
use crate::domain::registration::{RegistrationRequest, StakeholderCategory};
use crate::ports::{
    ApiError, CreateOrderRequest, FieldDef, FieldIssue, PaymentApi, RegistrationApi,
    SchemaProvider, UserTypeOption,
};

use super::types::{
    Detail, ErrorBody, OrderResponse, RegisterResponse, VerifyRequest, VerifyResponse,
};

/// HTTP adapter for the membership registration/payment service.
pub struct HttpMembershipApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpMembershipApi {
    /// Creates a client for the given base URL (without the `/api` suffix).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http_client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %text, "Membership API error response");
        Err(Self::map_error(status, &text))
    }

    /// Maps a non-success response to the port error taxonomy.
    fn map_error(status: StatusCode, body: &str) -> ApiError {
        let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|b| match (&b.detail, &b.message) {
                (Some(Detail::Message(m)), _) => Some(m.clone()),
                (Some(Detail::Issues(issues)), _) => issues.first().map(|i| i.msg.clone()),
                (None, Some(m)) => Some(m.clone()),
                (None, None) => None,
            })
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

        if status == StatusCode::CONFLICT {
            return ApiError::Conflict { message };
        }

        if let Some(ErrorBody {
            detail: Some(Detail::Issues(issues)),
            ..
        }) = parsed
        {
            return ApiError::Validation(
                issues
                    .into_iter()
                    .map(|i| FieldIssue {
                        field: i.field(),
                        message: i.msg,
                    })
                    .collect(),
            );
        }

        ApiError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpMembershipApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<UserId, ApiError> {
        tracing::info!(user_type = request.user_type(), "Submitting registration");
        let response: RegisterResponse = self.post_json("/register", request).await?;
        UserId::new(response.id).map_err(|e: ValidationError| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PaymentApi for HttpMembershipApi {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<PaymentOrder, ApiError> {
        tracing::info!(
            user_id = %request.user_id,
            amount_inr = request.amount_inr,
            "Creating payment order"
        );
        let response: OrderResponse = self.post_json("/payment/order", request).await?;
        Ok(PaymentOrder {
            order_id: OrderId::new(response.order_id)
                .map_err(|e| ApiError::Decode(e.to_string()))?,
            amount: response.amount,
            currency: response.currency,
            key_id: response.key_id,
        })
    }

    async fn verify(&self, payment: &CompletedPayment) -> Result<bool, ApiError> {
        tracing::info!(order_id = %payment.order_id, "Verifying payment");
        let body = VerifyRequest {
            razorpay_order_id: payment.order_id.as_str().to_string(),
            razorpay_payment_id: payment.payment_id.as_str().to_string(),
            razorpay_signature: payment.signature.clone(),
        };
        let response: VerifyResponse = self.post_json("/payment/verify", &body).await?;
        Ok(response.verified)
    }
}

#[async_trait]
impl SchemaProvider for HttpMembershipApi {
    async fn common_fields(&self) -> Result<Vec<FieldDef>, ApiError> {
        self.get_json("/schema/common").await
    }

    async fn user_types(&self) -> Result<Vec<UserTypeOption>, ApiError> {
        self.get_json("/schema/user-types").await
    }

    async fn user_type_fields(
        &self,
        category: StakeholderCategory,
    ) -> Result<Vec<FieldDef>, ApiError> {
        self.get_json(&format!("/schema/user-type/{}", category.user_type()))
            .await
    }
}
