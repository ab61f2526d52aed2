//! Operator-facing audit sinks

use crate::utils::error::Result;
use tracing::{error, info, warn};

use super::types::{AuditEvent, Severity};

/// Destination for operator-facing copies of audit events.
///
/// Best effort: the audit logger discards any error returned here and keeps
/// the event in memory regardless.
#[cfg_attr(test, mockall::automock)]
pub trait AuditSink: Send + Sync {
    /// Emit one event.
    ///
    /// Report failures as `Err`; implementations must not panic. The logger
    /// contains an unwinding panic, but builds with `panic = "abort"` cannot.
    fn emit(&self, event: &AuditEvent) -> Result<()>;
}

/// Sink writing events to `tracing` at a level matching their severity
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn emit(&self, event: &AuditEvent) -> Result<()> {
        let details = event
            .details
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        match event.severity {
            Severity::Error => error!(
                target: "audit",
                id = %event.id,
                action = %event.action,
                actor_id = event.actor_id.as_deref(),
                resource = %event.resource,
                resource_id = event.resource_id.as_deref(),
                details = details.as_deref(),
                "[AUDIT] {} on {}",
                event.action,
                event.resource
            ),
            Severity::Warning => warn!(
                target: "audit",
                id = %event.id,
                action = %event.action,
                actor_id = event.actor_id.as_deref(),
                resource = %event.resource,
                resource_id = event.resource_id.as_deref(),
                details = details.as_deref(),
                "[AUDIT] {} on {}",
                event.action,
                event.resource
            ),
            Severity::Info => info!(
                target: "audit",
                id = %event.id,
                action = %event.action,
                actor_id = event.actor_id.as_deref(),
                resource = %event.resource,
                resource_id = event.resource_id.as_deref(),
                details = details.as_deref(),
                "[AUDIT] {} on {}",
                event.action,
                event.resource
            ),
        }
        Ok(())
    }
}
