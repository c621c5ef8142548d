//! Domain layer - pure wizard, registration, and payment types.
//!
//! # Module Structure
//!
//! - `foundation` - Shared value objects, errors, and the state machine trait
//! - `wizard` - Step sequencing, accumulated wizard state, navigation guards
//! - `registration` - Applicant data model and category selection
//! - `payment` - Payment order, checkout outcome, submission phases

pub mod foundation;
pub mod payment;
pub mod registration;
pub mod wizard;
