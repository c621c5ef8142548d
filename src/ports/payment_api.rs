//! Payment API port: order creation and verification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::payment::{CompletedPayment, PaymentOrder};

use super::ApiError;

/// Body of `POST /payment/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub user_type: String,
    pub payment_type: String,
    pub amount_inr: u64,
    pub currency: String,
    pub receipt: String,
}

impl CreateOrderRequest {
    /// A subscription order with a fresh receipt identifier.
    pub fn subscription(user_id: UserId, user_type: &str, amount_inr: u64) -> Self {
        Self {
            user_id,
            user_type: user_type.to_string(),
            payment_type: "subscription".to_string(),
            amount_inr,
            currency: "INR".to_string(),
            receipt: format!("receipt_{}", uuid::Uuid::new_v4().simple()),
        }
    }
}

/// Port for the payment endpoints.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Requests an order descriptor from the gateway via the API. Must not
    /// be called before registration has produced a user id.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<PaymentOrder, ApiError>;

    /// Verifies a widget-reported success server-side. Only a `true` result
    /// may transition the wizard to Success.
    async fn verify(&self, payment: &CompletedPayment) -> Result<bool, ApiError>;
}
