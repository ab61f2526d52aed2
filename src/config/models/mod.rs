//! Configuration data models

pub mod audit;
pub mod logging;

// Re-export all configuration types
pub use audit::*;
pub use logging::*;

/// Default audit log capacity
pub fn default_max_events() -> usize {
    1000
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
