//! Helper event constructors
//!
//! Callers rely on the exact resource names and detail keys produced here.

use crate::auth::rbac::Role;

use super::logger::AuditLogger;
use super::types::{AuditAction, AuditDetails, AuditEvent, AuditEventInput, Severity};

/// Resource name for login/logout events
pub const AUTHENTICATION_RESOURCE: &str = "authentication";
/// Resource name for role change events
pub const USER_ROLE_RESOURCE: &str = "user_role";

fn with_details(input: AuditEventInput, details: Option<AuditDetails>) -> AuditEventInput {
    match details {
        Some(details) => input.details(details),
        None => input,
    }
}

impl AuditLogger {
    /// Successful sign-in
    pub fn login(&self, actor_id: &str, details: Option<AuditDetails>) -> AuditEvent {
        let input = AuditEventInput::new(AuditAction::Login, AUTHENTICATION_RESOURCE).actor(actor_id);
        self.record(with_details(input, details))
    }

    /// Sign-out
    pub fn logout(&self, actor_id: &str, details: Option<AuditDetails>) -> AuditEvent {
        let input = AuditEventInput::new(AuditAction::Logout, AUTHENTICATION_RESOURCE).actor(actor_id);
        self.record(with_details(input, details))
    }

    /// Failed sign-in, recorded as a security event
    pub fn login_failed(&self, actor_id: &str, details: Option<AuditDetails>) -> AuditEvent {
        let input =
            AuditEventInput::new(AuditAction::LoginFailed, AUTHENTICATION_RESOURCE).actor(actor_id);
        self.record_security_event(with_details(input, details))
    }

    /// Denied access, recorded as a security event
    pub fn access_denied(
        &self,
        actor_id: &str,
        resource: &str,
        resource_id: Option<&str>,
        details: Option<AuditDetails>,
    ) -> AuditEvent {
        let mut input = AuditEventInput::new(AuditAction::AccessDenied, resource).actor(actor_id);
        if let Some(resource_id) = resource_id {
            input = input.resource_id(resource_id);
        }
        self.record_security_event(with_details(input, details))
    }

    /// Granted permission
    pub fn permission_granted(
        &self,
        actor_id: &str,
        resource: &str,
        resource_id: Option<&str>,
        details: Option<AuditDetails>,
    ) -> AuditEvent {
        let mut input =
            AuditEventInput::new(AuditAction::PermissionGranted, resource).actor(actor_id);
        if let Some(resource_id) = resource_id {
            input = input.resource_id(resource_id);
        }
        self.record(with_details(input, details))
    }

    /// Role change. Always a warning, whoever made the change.
    pub fn role_changed(
        &self,
        actor_id: &str,
        old_role: Role,
        new_role: Role,
        changed_by: Option<&str>,
    ) -> AuditEvent {
        let mut input = AuditEventInput::new(AuditAction::RoleChanged, USER_ROLE_RESOURCE)
            .actor(actor_id)
            .detail("oldRole", old_role.as_str())
            .detail("newRole", new_role.as_str())
            .severity(Severity::Warning);
        if let Some(changed_by) = changed_by {
            input = input.detail("changedBy", changed_by);
        }
        self.record(input)
    }

    /// Access to a specific resource instance
    pub fn resource_access(
        &self,
        actor_id: &str,
        resource: &str,
        resource_id: &str,
        action: &str,
    ) -> AuditEvent {
        let input = AuditEventInput::new(AuditAction::ResourceAccessed, resource)
            .actor(actor_id)
            .resource_id(resource_id)
            .detail("action", action);
        self.record(input)
    }
}
