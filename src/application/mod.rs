//! Application layer - use cases wiring the domain to the ports.
//!
//! - `navigator` - Store-backed step navigation with entry guards
//! - `orchestrator` - The register/order/checkout/verify protocol

mod navigator;
mod orchestrator;

pub use navigator::WizardNavigator;
pub use orchestrator::{Completion, SubmissionError, SubmissionOrchestrator, SubmissionState};
