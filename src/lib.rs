//! Membership Wizard - multi-step membership registration core.
//!
//! Implements the wizard step state machine, per-step session storage,
//! dependent category selection, and the registration/payment orchestration
//! protocol against the remote membership API and checkout gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
