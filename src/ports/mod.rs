//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! wizard core and the outside world. Adapters implement these ports.
//!
//! ## Network Ports
//!
//! - `RegistrationApi` - The remote `/register` endpoint
//! - `PaymentApi` - `/payment/order` and `/payment/verify`
//! - `SchemaProvider` - Dynamic field definitions per step
//! - `CheckoutGateway` - The third-party checkout widget
//!
//! ## Local Ports
//!
//! - `StepStore` - Session-scoped per-step blobs
//! - `ApplicationLog` - Durable client-side backup of completed applications

mod application_log;
mod checkout_gateway;
mod errors;
mod payment_api;
mod registration_api;
mod schema_provider;
mod step_store;

pub use application_log::{ApplicationLog, ApplicationLogError, CompletedApplication};
pub use checkout_gateway::{CheckoutError, CheckoutGateway};
pub use errors::{ApiError, FieldIssue};
pub use payment_api::{CreateOrderRequest, PaymentApi};
pub use registration_api::RegistrationApi;
pub use schema_provider::{FieldDef, FieldType, SchemaProvider, UserTypeOption};
pub use step_store::{StepStore, StepStoreExt};
