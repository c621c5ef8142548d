//! Checkout widget configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_display_name() -> String {
    "Membership Portal".to_string()
}

fn default_theme_color() -> String {
    "#3B82F6".to_string()
}

/// Checkout widget branding
///
/// The gateway key itself is never configured here: it arrives with each
/// order from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Merchant name shown in the widget header
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Widget accent color
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            theme_color: default_theme_color(),
        }
    }
}

impl CheckoutConfig {
    /// Validate checkout configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CHECKOUT_DISPLAY_NAME"));
        }
        if !self.theme_color.starts_with('#') {
            return Err(ValidationError::InvalidThemeColor);
        }
        Ok(())
    }
}
