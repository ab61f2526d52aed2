//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events. Hosts that have no
//! subscriber of their own can install one here.

use crate::config::LoggingConfig;
use crate::utils::error::{AuthzError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging configuration. `RUST_LOG` wins when set.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AuthzError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install a global fmt subscriber.
///
/// Returns `Ok(false)` when a global subscriber was already set, so calling
/// this more than once is harmless.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(false)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init()
            .is_ok()
    };

    Ok(installed)
}
