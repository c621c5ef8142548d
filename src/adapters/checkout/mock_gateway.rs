//! Scripted checkout gateway for tests and headless runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::foundation::PaymentId;
use crate::domain::payment::{CheckoutOutcome, CheckoutRequest, CompletedPayment};
use crate::ports::{CheckoutError, CheckoutGateway};

/// Gateway that replays scripted outcomes and records every open request.
///
/// With no script queued it behaves like a gateway whose widget completes
/// immediately against the opened order.
pub struct MockCheckoutGateway {
    script: Mutex<VecDeque<Result<CheckoutOutcome, CheckoutError>>>,
    opened: Mutex<Vec<CheckoutRequest>>,
}

impl MockCheckoutGateway {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            opened: Mutex::new(Vec::new()),
        }
    }

    /// Queues an outcome for the next `open` call.
    pub fn push_outcome(&self, outcome: CheckoutOutcome) {
        self.script.lock().unwrap().push_back(Ok(outcome));
    }

    /// Queues an `open` failure (widget script unavailable).
    pub fn push_unavailable(&self, reason: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(CheckoutError::Unavailable(reason.into())));
    }

    /// Every checkout request that was opened, in order.
    pub fn opened_requests(&self) -> Vec<CheckoutRequest> {
        self.opened.lock().unwrap().clone()
    }
}

impl Default for MockCheckoutGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckoutGateway for MockCheckoutGateway {
    async fn open(&self, request: CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError> {
        self.opened.lock().unwrap().push(request.clone());
        if let Some(scripted) = self.script.lock().unwrap().pop_front() {
            return scripted;
        }
        Ok(CheckoutOutcome::Completed(CompletedPayment {
            order_id: request.order_id,
            payment_id: PaymentId::new(format!("pay_mock_{}", self.opened.lock().unwrap().len()))
                .expect("mock payment id is non-empty"),
            signature: "mock-signature".to_string(),
        }))
    }
}
