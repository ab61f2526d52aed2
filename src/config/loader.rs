//! Configuration loading utilities

use super::models::*;
use crate::utils::error::{AuthzError, Result};
use std::env;
use tracing::debug;

/// Environment variable for the audit log capacity
pub const ENV_AUDIT_MAX_EVENTS: &str = "PORTAL_AUDIT_MAX_EVENTS";
/// Environment variable toggling the operator-facing audit sink
pub const ENV_AUDIT_CONSOLE_ENABLED: &str = "PORTAL_AUDIT_CONSOLE_ENABLED";
/// Environment variable for the default log filter
pub const ENV_LOG_LEVEL: &str = "PORTAL_LOG_LEVEL";
/// Environment variable switching to JSON log output
pub const ENV_LOG_JSON: &str = "PORTAL_LOG_JSON";

impl AuditConfig {
    /// Load audit configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(max_events) = lookup(ENV_AUDIT_MAX_EVENTS) {
            config.max_events = max_events
                .trim()
                .parse()
                .map_err(|e| AuthzError::config(format!("Invalid {}: {}", ENV_AUDIT_MAX_EVENTS, e)))?;
        }
        if let Some(enabled) = lookup(ENV_AUDIT_CONSOLE_ENABLED) {
            config.console_enabled = parse_flag(ENV_AUDIT_CONSOLE_ENABLED, &enabled)?;
        }

        Ok(config)
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.json = parse_flag(ENV_LOG_JSON, &json)?;
        }

        debug!("Logging configuration loaded from environment");
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AuthzError::config(format!(
            "Invalid {}: expected a boolean, got '{}'",
            key, other
        ))),
    }
}
