//! Step 1 applicant details.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Objectives offered by the step-1 form when the schema endpoint is
/// unavailable. The server-supplied list wins when present.
pub const FALLBACK_OBJECTIVES: [&str; 9] = [
    "Personal Growth",
    "Professional Development",
    "Spiritual Enlightenment",
    "Community Service",
    "Health & Wellness",
    "Education & Learning",
    "Business Networking",
    "Social Impact",
    "Other",
];

/// Personal details collected at step 1.
///
/// Immutable once the wizard advances except via explicit back-navigation;
/// field names match the registration API payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub about_yourself: String,
    #[serde(default)]
    pub reference_number: String,
    pub objective: String,
}

impl PersonalInfo {
    /// Validates all required step-1 constraints.
    ///
    /// Returns every violation rather than the first one, so the form can
    /// render errors inline against each field.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("password", &self.password),
            ("phone_number", &self.phone_number),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("about_yourself", &self.about_yourself),
            ("objective", &self.objective),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::empty_field(field));
            }
        }

        if !self.email.trim().is_empty() {
            let parts: Vec<&str> = self.email.splitn(2, '@').collect();
            let valid = parts.len() == 2
                && !parts[0].is_empty()
                && parts[1].contains('.')
                && !parts[1].starts_with('.');
            if !valid {
                errors.push(ValidationError::invalid_format(
                    "email",
                    "expected name@domain.tld",
                ));
            }
        }

        if !self.phone_number.trim().is_empty() {
            let digits = self
                .phone_number
                .chars()
                .filter(|c| c.is_ascii_digit())
                .count();
            if !(7..=15).contains(&digits) {
                errors.push(ValidationError::length_out_of_range(
                    "phone_number",
                    7,
                    15,
                    digits,
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_info() -> PersonalInfo {
        PersonalInfo {
            full_name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret123".to_string(),
            phone_number: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            about_yourself: "Engineer".to_string(),
            objective: "Business Networking".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_info_passes() {
        assert!(valid_info().validate().is_ok());
    }

    #[test]
    fn empty_required_fields_are_all_reported() {
        let errors = PersonalInfo::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert!(fields.contains(&"full_name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"objective"));
        // reference_number and coordinates are optional
        assert!(!fields.contains(&"reference_number"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut info = valid_info();
        info.email = "not-an-email".to_string();
        let errors = info.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field() == "email"));
    }

    #[test]
    fn short_phone_number_is_rejected() {
        let mut info = valid_info();
        info.phone_number = "123".to_string();
        let errors = info.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.field() == "phone_number"));
    }

    #[test]
    fn phone_number_may_contain_separators() {
        let mut info = valid_info();
        info.phone_number = "+91 98765-43210".to_string();
        assert!(info.validate().is_ok());
    }
}
