//! Final-step submission protocol.
//!
//! Runs register, order creation, checkout, and verification as one
//! resumable sequence. The stored user id and order make each sub-step
//! idempotent from the caller's point of view: a retry after a failure
//! resumes at the first unsatisfied sub-step instead of restarting.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{StateMachine, UserId, ValidationError};
use crate::domain::payment::{
    CheckoutOutcome, CheckoutPrefill, CheckoutRequest, CompletedPayment, PaymentOrder,
    SubmissionPhase,
};
use crate::domain::registration::RegistrationRequest;
use crate::domain::wizard::{Confirmation, GuardViolation, WizardState, WizardStep};
use crate::ports::{
    ApiError, ApplicationLog, CheckoutError, CheckoutGateway, CompletedApplication,
    CreateOrderRequest, PaymentApi, RegistrationApi, StepStore, StepStoreExt,
};

/// Reserved store key for the protocol's durable progress.
const SUBMISSION_KEY: &str = "submission";

/// Durable protocol progress: what has already succeeded.
///
/// Persisted on every change so a reload mid-protocol resumes rather than
/// double-registering or double-ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionState {
    pub user_id: Option<UserId>,
    pub order: Option<PaymentOrder>,
}

/// Errors surfaced by the submission protocol.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Guard(#[from] GuardViolation),

    /// The assembled payload failed local validation.
    #[error("Submission payload is invalid")]
    Payload(Vec<ValidationError>),

    /// HTTP 409 from `/register`; the server message is shown verbatim.
    #[error("{message}")]
    AlreadyRegistered { message: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The gateway reported a failed payment attempt.
    #[error("Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// The widget reported success but the server would not confirm it.
    #[error("Payment verification failed. If money was deducted it will be refunded.")]
    VerificationFailed,

    /// A proceed call arrived while the protocol was already running.
    #[error("A submission is already in progress")]
    Busy,
}

impl SubmissionError {
    /// Whether retrying the protocol may succeed without changed input.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Api(e) => e.is_retryable(),
            SubmissionError::Checkout(_) | SubmissionError::PaymentFailed { .. } => true,
            _ => false,
        }
    }
}

/// How a delivered checkout outcome was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Server-verified success; the wizard may enter its terminal step.
    Verified(Confirmation),

    /// The outcome arrived while no payment was awaited. Duplicate widget
    /// callbacks land here and change nothing.
    Ignored,

    /// The user closed the widget without paying. Not an error; the stored
    /// order is kept for the next attempt.
    Abandoned,
}

/// Drives the register/order/checkout/verify sequence against the ports.
///
/// Single-owner by design: the shell holds one orchestrator per wizard
/// session and calls it from one task, mirroring the one-submission-at-a-
/// time rule the phase machine enforces.
pub struct SubmissionOrchestrator {
    registration: Arc<dyn RegistrationApi>,
    payments: Arc<dyn PaymentApi>,
    checkout: Arc<dyn CheckoutGateway>,
    store: Arc<dyn StepStore>,
    log: Arc<dyn ApplicationLog>,
    phase: SubmissionPhase,
    submission: SubmissionState,
}

impl SubmissionOrchestrator {
    /// Builds an orchestrator, resuming any stored protocol progress.
    pub fn new(
        registration: Arc<dyn RegistrationApi>,
        payments: Arc<dyn PaymentApi>,
        checkout: Arc<dyn CheckoutGateway>,
        store: Arc<dyn StepStore>,
        log: Arc<dyn ApplicationLog>,
    ) -> Self {
        let submission: SubmissionState = store.load_typed(SUBMISSION_KEY).unwrap_or_default();
        if submission.user_id.is_some() {
            tracing::info!("Resuming a previously started submission");
        }
        Self {
            registration,
            payments,
            checkout,
            store,
            log,
            phase: SubmissionPhase::Idle,
            submission,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Runs the protocol up to the point where the checkout widget must
    /// open, returning its invocation payload.
    ///
    /// Registration and order creation each happen at most once per
    /// applicant: previously stored results are reused on retry.
    pub async fn proceed(
        &mut self,
        wizard: &WizardState,
    ) -> Result<CheckoutRequest, SubmissionError> {
        if self.phase != SubmissionPhase::Idle {
            return Err(SubmissionError::Busy);
        }
        wizard.guard_entry(WizardStep::Payment)?;

        // guard_entry has established presence of all four parts
        let (personal, selection, detail, tags) = match (
            wizard.personal.clone(),
            wizard.selection.as_ref(),
            wizard.detail.clone(),
            wizard.tags.clone(),
        ) {
            (Some(p), Some(s), Some(d), Some(t)) => (p, s, d, t),
            _ => {
                return Err(GuardViolation {
                    missing: "category preferences",
                    resume_at: WizardStep::Preferences,
                }
                .into())
            }
        };

        let request = RegistrationRequest::assemble(personal, selection, detail, tags)
            .map_err(SubmissionError::Payload)?;

        self.enter(SubmissionPhase::Registering);
        let user_id = match self.submission.user_id.clone() {
            Some(id) => {
                tracing::debug!(user = id.as_str(), "Reusing registered user");
                id
            }
            None => match self.registration.register(&request).await {
                Ok(id) => {
                    tracing::info!(user = id.as_str(), "Applicant registered");
                    self.submission.user_id = Some(id.clone());
                    self.persist();
                    id
                }
                Err(ApiError::Conflict { message }) => {
                    self.enter(SubmissionPhase::Idle);
                    return Err(SubmissionError::AlreadyRegistered { message });
                }
                Err(e) => {
                    self.enter(SubmissionPhase::Idle);
                    return Err(e.into());
                }
            },
        };

        self.enter(SubmissionPhase::CreatingOrder);
        let order = match self.submission.order.clone() {
            Some(order) => {
                tracing::debug!(order = order.order_id.as_str(), "Reusing stored order");
                order
            }
            None => {
                let body = CreateOrderRequest::subscription(
                    user_id,
                    selection.category.user_type(),
                    selection.price_inr,
                );
                match self.payments.create_order(&body).await {
                    Ok(order) => {
                        tracing::info!(
                            order = order.order_id.as_str(),
                            amount = order.amount,
                            "Payment order created"
                        );
                        self.submission.order = Some(order.clone());
                        self.persist();
                        order
                    }
                    Err(e) => {
                        self.enter(SubmissionPhase::Idle);
                        return Err(e.into());
                    }
                }
            }
        };

        self.enter(SubmissionPhase::AwaitingPayment);
        let prefill = CheckoutPrefill {
            name: request.applicant_name().to_string(),
            email: request.applicant_email().to_string(),
            contact: request.applicant_phone().to_string(),
        };
        Ok(CheckoutRequest::from_order(&order, &selection.title, prefill))
    }

    /// Resolves a checkout outcome delivered while a payment was awaited.
    ///
    /// Outcomes delivered in any other phase (duplicate widget callbacks
    /// included) are ignored without side effects.
    pub async fn complete(
        &mut self,
        wizard: &WizardState,
        outcome: CheckoutOutcome,
    ) -> Result<Completion, SubmissionError> {
        if self.phase != SubmissionPhase::AwaitingPayment {
            tracing::warn!(phase = ?self.phase, "Checkout outcome ignored");
            return Ok(Completion::Ignored);
        }

        match outcome {
            CheckoutOutcome::Dismissed => {
                tracing::info!("Checkout dismissed without payment");
                self.enter(SubmissionPhase::Idle);
                Ok(Completion::Abandoned)
            }
            CheckoutOutcome::Failed { reason } => {
                self.enter(SubmissionPhase::Idle);
                Err(SubmissionError::PaymentFailed { reason })
            }
            CheckoutOutcome::Completed(payment) => {
                self.enter(SubmissionPhase::Verifying);
                match self.payments.verify(&payment).await {
                    Ok(true) => {
                        self.enter(SubmissionPhase::Completed);
                        Ok(Completion::Verified(self.finish(wizard, &payment)))
                    }
                    Ok(false) => {
                        self.enter(SubmissionPhase::Idle);
                        Err(SubmissionError::VerificationFailed)
                    }
                    Err(e) => {
                        self.enter(SubmissionPhase::Idle);
                        Err(e.into())
                    }
                }
            }
        }
    }

    /// The whole final step in one call: proceed, open checkout, resolve.
    pub async fn submit(&mut self, wizard: &WizardState) -> Result<Completion, SubmissionError> {
        let request = self.proceed(wizard).await?;
        let outcome = match self.checkout.open(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.enter(SubmissionPhase::Idle);
                return Err(e.into());
            }
        };
        self.complete(wizard, outcome).await
    }

    fn finish(&mut self, wizard: &WizardState, payment: &CompletedPayment) -> Confirmation {
        let (name, email) = wizard
            .personal
            .as_ref()
            .map(|p| (p.full_name.clone(), p.email.clone()))
            .unwrap_or_default();
        let (title, price_inr) = wizard
            .selection
            .as_ref()
            .map(|s| (s.title.clone(), s.price_inr))
            .unwrap_or_default();

        // Best-effort backup record; the server already holds the truth.
        if let Some(user_id) = self.submission.user_id.clone() {
            let record = CompletedApplication {
                name: name.clone(),
                email: email.clone(),
                stakeholder: title.clone(),
                price_inr,
                user_id,
                payment_id: payment.payment_id.clone(),
                order_id: payment.order_id.clone(),
                status: "completed".to_string(),
                created_at: Utc::now(),
            };
            if let Err(e) = self.log.append(record) {
                tracing::warn!(error = %e, "Failed to record completed application");
            }
        }

        self.store.clear_all();
        self.submission = SubmissionState::default();
        Confirmation {
            name,
            email,
            category_title: title,
        }
    }

    fn persist(&self) {
        self.store.save_typed(SUBMISSION_KEY, &self.submission);
    }

    // Call sites keep transitions legal; the machine check is a backstop.
    fn enter(&mut self, next: SubmissionPhase) {
        match self.phase.transition_to(next) {
            Ok(phase) => {
                tracing::debug!(from = ?self.phase, to = ?phase, "Submission phase change");
                self.phase = phase;
            }
            Err(e) => tracing::error!(error = %e, "Refused illegal phase change"),
        }
    }
}
