//! Audit log
//!
//! Process-lifetime, queryable record of security-relevant events. Recording
//! never fails: operator sink errors are swallowed and the event is kept.

mod events;
mod logger;
mod sink;
mod types;

pub use events::{AUTHENTICATION_RESOURCE, USER_ROLE_RESOURCE};
pub use logger::AuditLogger;
pub use sink::{AuditSink, TracingSink};
pub use types::{AuditAction, AuditDetails, AuditEvent, AuditEventInput, AuditStats, Severity};
