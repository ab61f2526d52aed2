//! Configuration management
//!
//! The audit log capacity and console sink toggle are the only knobs of the
//! authorization core; logging setup rides along.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AuthzConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| AuthzError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AuthzError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            audit: AuditConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit variable map (tests, embedded hosts)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let lookup = |key: &str| vars.get(key).cloned();
        let config = Self {
            audit: AuditConfig::from_lookup(lookup)?,
            logging: LoggingConfig::from_lookup(lookup)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.audit
            .validate()
            .map_err(|e| AuthzError::Config(format!("Audit config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| AuthzError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration.
    ///
    /// Only non-default values in `other` override `self`: a field that `other`
    /// leaves at its default (`max_events: 1000`, `console_enabled: true`,
    /// `level: "info"`, `json: false`) never replaces a value already set here.
    pub fn merge(mut self, other: Self) -> Self {
        self.audit = self.audit.merge(other.audit);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuthzError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
