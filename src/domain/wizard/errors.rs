//! Navigation and guard errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::WizardStep;

/// A step was entered without its required upstream data.
///
/// Rendered as a blocking notice with a single recovery action returning
/// the user to `resume_at`; the wizard never proceeds with partial data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please complete the previous steps first: missing {missing}")]
pub struct GuardViolation {
    /// What the guard found absent (e.g. "stakeholder selection").
    pub missing: &'static str,

    /// The last valid step, offered as the recovery action.
    pub resume_at: WizardStep,
}

/// Errors surfaced by wizard navigation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Guard(#[from] GuardViolation),

    #[error("Invalid step transition: {0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("Step '{step}' requires data that was not provided")]
    MissingStepData { step: WizardStep },

    /// Leaving a step whose entered values fail validation.
    #[error("Step '{step}' has {} invalid field(s)", errors.len())]
    InvalidFields {
        step: WizardStep,
        errors: Vec<ValidationError>,
    },
}
