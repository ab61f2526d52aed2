//! Audit and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl Validate for AuditConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating audit configuration");

        if self.max_events == 0 {
            return Err("Audit max_events must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        // A bare word would parse as a target name; only level names are accepted bare.
        for directive in self.level.split(',').map(str::trim) {
            if !directive.is_empty()
                && !directive.contains('=')
                && !KNOWN_LEVELS.contains(&directive.to_ascii_lowercase().as_str())
            {
                return Err(format!(
                    "Unknown log level '{}', expected one of {} or a target=level directive",
                    directive,
                    KNOWN_LEVELS.join("/")
                ));
            }
        }

        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        Ok(())
    }
}
