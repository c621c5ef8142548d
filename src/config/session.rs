//! Session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

fn default_dir() -> PathBuf {
    PathBuf::from(".membership_session")
}

fn default_applications_file() -> PathBuf {
    PathBuf::from("membership_applications.json")
}

/// Local storage locations for step blobs and the application log
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory holding per-step JSON blobs
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File holding the completed-application backup log
    #[serde(default = "default_applications_file")]
    pub applications_file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            applications_file: default_applications_file(),
        }
    }
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_DIR"));
        }
        if self.applications_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired(
                "SESSION_APPLICATIONS_FILE",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dir, PathBuf::from(".membership_session"));
    }

    #[test]
    fn rejects_empty_dir() {
        let config = SessionConfig {
            dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
