//! Wizard step sequencing and accumulated state.
//!
//! - `step` - The five form steps plus the terminal success state
//! - `state` - Explicit accumulated wizard state and entry guards
//! - `confirmation` - Terminal confirmation data for the result page
//! - `errors` - Navigation and guard errors

mod confirmation;
mod errors;
mod state;
mod step;

pub use confirmation::{Confirmation, HOME_REDIRECT_DELAY};
pub use errors::{GuardViolation, WizardError};
pub use state::WizardState;
pub use step::WizardStep;
