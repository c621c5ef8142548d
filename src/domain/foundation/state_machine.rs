//! State machine trait for lifecycle enums.
//!
//! Both the wizard step sequence and the submission phases are modelled as
//! explicit state machines so that every transition is validated in one
//! place instead of being scattered across call sites.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors declare which transitions are legal; `transition_to`
/// performs the validated move.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if a transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, returning an error if it is not legal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// True when no outgoing transitions remain.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
