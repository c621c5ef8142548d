//! The wizard's step sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The five form steps plus the terminal success state.
///
/// Transitions are strictly one forward or one backward; there is no
/// skipping, and Success has no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Category,
    CategoryDetail,
    Preferences,
    Payment,
    Success,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Personal,
        WizardStep::Category,
        WizardStep::CategoryDetail,
        WizardStep::Preferences,
        WizardStep::Payment,
        WizardStep::Success,
    ];

    /// 1-based position, as shown in the step header.
    pub fn ordinal(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    /// Key under which this step's blob is stored in the session store.
    pub fn storage_key(&self) -> &'static str {
        match self {
            WizardStep::Personal => "step1_personal",
            WizardStep::Category => "step2_category",
            WizardStep::CategoryDetail => "step3_category_detail",
            WizardStep::Preferences => "step4_preferences",
            WizardStep::Payment => "step5_payment",
            WizardStep::Success => "success",
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.ordinal()).copied()
    }

    /// The preceding step, if any. Success is terminal and has none.
    pub fn back(&self) -> Option<WizardStep> {
        if *self == WizardStep::Success {
            return None;
        }
        self.ordinal()
            .checked_sub(2)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.back() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().chain(self.back()).collect()
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Personal
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_advance_strictly_one_forward() {
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Category));
        assert_eq!(WizardStep::Payment.next(), Some(WizardStep::Success));
        assert_eq!(WizardStep::Success.next(), None);
        assert!(WizardStep::Personal
            .transition_to(WizardStep::CategoryDetail)
            .is_err());
    }

    #[test]
    fn back_moves_strictly_one_step() {
        assert_eq!(WizardStep::Category.back(), Some(WizardStep::Personal));
        assert_eq!(WizardStep::Personal.back(), None);
        assert!(WizardStep::Payment
            .transition_to(WizardStep::CategoryDetail)
            .is_err());
        assert!(WizardStep::Payment
            .transition_to(WizardStep::Preferences)
            .is_ok());
    }

    #[test]
    fn success_is_terminal() {
        assert!(WizardStep::Success.is_terminal());
        assert_eq!(WizardStep::Success.back(), None);
    }

    #[test]
    fn ordinals_match_wizard_order() {
        assert_eq!(WizardStep::Personal.ordinal(), 1);
        assert_eq!(WizardStep::Payment.ordinal(), 5);
        assert_eq!(WizardStep::Success.ordinal(), 6);
    }

    #[test]
    fn storage_keys_are_distinct() {
        let mut keys: Vec<&str> = WizardStep::ALL.iter().map(|s| s.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), WizardStep::ALL.len());
    }
}
