//! Submission protocol phases.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the registration/payment protocol currently stands.
///
/// The happy path runs Idle through Completed in order. Every intermediate
/// phase can fall back to Idle, which is what makes the failed sub-step
/// individually retryable: the stored user id and order survive the fall
/// back, so a retry resumes instead of restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Nothing in flight; proceed is available.
    Idle,

    /// `/register` call in flight.
    Registering,

    /// `/payment/order` call in flight.
    CreatingOrder,

    /// Checkout widget open; resumption is externally paced.
    AwaitingPayment,

    /// `/payment/verify` call in flight.
    Verifying,

    /// Verified success; terminal.
    Completed,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, Registering)
                | (Registering, CreatingOrder)
                | (Registering, Idle)
                | (CreatingOrder, AwaitingPayment)
                | (CreatingOrder, Idle)
                | (AwaitingPayment, Verifying)
                | (AwaitingPayment, Idle)
                | (Verifying, Completed)
                | (Verifying, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![Registering],
            Registering => vec![CreatingOrder, Idle],
            CreatingOrder => vec![AwaitingPayment, Idle],
            AwaitingPayment => vec![Verifying, Idle],
            Verifying => vec![Completed, Idle],
            Completed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_sequential() {
        use SubmissionPhase::*;
        let mut phase = Idle;
        for next in [Registering, CreatingOrder, AwaitingPayment, Verifying, Completed] {
            phase = phase.transition_to(next).unwrap();
        }
        assert!(phase.is_terminal());
    }

    #[test]
    fn no_skipping_forward() {
        use SubmissionPhase::*;
        assert!(Idle.transition_to(CreatingOrder).is_err());
        assert!(Registering.transition_to(AwaitingPayment).is_err());
        assert!(Idle.transition_to(Completed).is_err());
    }

    #[test]
    fn intermediate_phases_fall_back_to_idle() {
        use SubmissionPhase::*;
        for phase in [Registering, CreatingOrder, AwaitingPayment, Verifying] {
            assert!(phase.can_transition_to(&Idle), "{:?} cannot retry", phase);
        }
        assert!(!Completed.can_transition_to(&Idle));
    }
}
