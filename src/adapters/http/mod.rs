//! HTTP adapter for the membership API.

mod client;
mod types;

pub use client::HttpMembershipApi;
