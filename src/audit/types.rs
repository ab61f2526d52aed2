//! Core types for the audit log

use crate::auth::rbac::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Structured event details
pub type AuditDetails = HashMap<String, serde_json::Value>;

/// Kind of security-relevant occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Login,
    Logout,
    LoginFailed,
    PasswordChanged,
    RoleChanged,
    PermissionGranted,
    PermissionRevoked,
    AccessDenied,
    ResourceAccessed,
    ResourceCreated,
    ResourceUpdated,
    ResourceDeleted,
    SecurityViolation,
    SuspiciousActivity,
    RateLimitExceeded,
}

impl AuditAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "login",
            AuditAction::Logout => "logout",
            AuditAction::LoginFailed => "login_failed",
            AuditAction::PasswordChanged => "password_changed",
            AuditAction::RoleChanged => "role_changed",
            AuditAction::PermissionGranted => "permission_granted",
            AuditAction::PermissionRevoked => "permission_revoked",
            AuditAction::AccessDenied => "access_denied",
            AuditAction::ResourceAccessed => "resource_accessed",
            AuditAction::ResourceCreated => "resource_created",
            AuditAction::ResourceUpdated => "resource_updated",
            AuditAction::ResourceDeleted => "resource_deleted",
            AuditAction::SecurityViolation => "security_violation",
            AuditAction::SuspiciousActivity => "suspicious_activity",
            AuditAction::RateLimitExceeded => "rate_limit_exceeded",
        }
    }

    /// Severity used for security events of this kind
    pub fn security_severity(self) -> Severity {
        match self {
            AuditAction::SecurityViolation | AuditAction::LoginFailed => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Whether events of this severity count as security events
    pub fn is_security_relevant(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    /// Wire name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Unique within a process run
    pub id: String,
    /// Capture time
    pub timestamp: DateTime<Utc>,
    /// Event kind
    pub action: AuditAction,
    /// Acting principal
    pub actor_id: Option<String>,
    /// Acting principal's role
    pub actor_role: Option<Role>,
    /// Resource name
    pub resource: String,
    /// Specific resource instance
    pub resource_id: Option<String>,
    /// Structured details
    pub details: Option<AuditDetails>,
    /// Severity classification
    pub severity: Severity,
    /// Session the event belongs to
    pub session_id: Option<String>,
}

/// Caller-supplied fields of an audit event; id and timestamp are stamped on record
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEventInput {
    pub action: AuditAction,
    pub actor_id: Option<String>,
    pub actor_role: Option<Role>,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: Option<AuditDetails>,
    /// Defaults to [`Severity::Info`] when unset
    pub severity: Option<Severity>,
    pub session_id: Option<String>,
}

impl AuditEventInput {
    /// Start an event for an action on a resource
    pub fn new(action: AuditAction, resource: impl Into<String>) -> Self {
        Self {
            action,
            actor_id: None,
            actor_role: None,
            resource: resource.into(),
            resource_id: None,
            details: None,
            severity: None,
            session_id: None,
        }
    }

    pub fn actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn actor_role(mut self, role: Role) -> Self {
        self.actor_role = Some(role);
        self
    }

    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn details(mut self, details: AuditDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single detail field
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Counts over the retained events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditStats {
    /// Events currently retained
    pub retained: usize,
    /// Events recorded since creation or the last clear, including evicted ones
    pub total_recorded: u64,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}
