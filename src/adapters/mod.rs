//! Adapters - implementations of the ports.
//!
//! - `http` - reqwest-backed client for the membership API
//! - `session` - step store and application log adapters
//! - `checkout` - checkout gateway adapters (scripted mock)
//! - `schema` - static fallback schema provider

pub mod checkout;
pub mod http;
pub mod schema;
pub mod session;
