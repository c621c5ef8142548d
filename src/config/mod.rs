//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `MEMBERSHIP`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use membership_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod checkout;
mod error;
mod session;

pub use api::ApiConfig;
pub use checkout::CheckoutConfig;
pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section carries working defaults, so a bare environment loads a
/// configuration pointed at a local development API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote membership API (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Checkout widget branding
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Local session storage locations
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the `MEMBERSHIP`
    /// prefix, e.g. `MEMBERSHIP__API__BASE_URL=https://portal.example.com`
    /// becomes `api.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into their
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBERSHIP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.checkout.validate()?;
        self.session.validate()?;
        Ok(())
    }
}
