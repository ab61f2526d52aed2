//! Audit log configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Audit log configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum number of retained events; the oldest is evicted first
    #[serde(default = "default_max_events")]
    pub max_events: usize,
    /// Emit a copy of every event to the operator-facing log
    #[serde(default = "default_true")]
    pub console_enabled: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_events: default_max_events(),
            console_enabled: true,
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations; only non-default values in `other` override `self`
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_events != default_max_events() {
            self.max_events = other.max_events;
        }
        if !other.console_enabled {
            self.console_enabled = other.console_enabled;
        }
        self
    }
}
