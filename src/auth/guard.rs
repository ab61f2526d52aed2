//! Caller-side helpers pairing an authorization decision with its audit record
//!
//! Checks and audit writes are sequenced, not atomic: a concurrent reader may
//! observe the decision before the event lands in the log.

use crate::audit::{AuditDetails, AuditLogger, USER_ROLE_RESOURCE};
use crate::auth::ability::Ability;
use crate::auth::principal::Principal;
use crate::auth::rbac::Role;
use crate::auth::types::{Action, Subject};
use crate::utils::error::{AuthzError, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Actor id used when the ability carries no principal
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// Checks an ability and records denials in the audit log
#[derive(Debug, Clone, Copy)]
pub struct AccessGuard<'a> {
    ability: &'a Ability,
    audit: &'a AuditLogger,
    actor_id: &'a str,
}

impl<'a> AccessGuard<'a> {
    /// Guard acting for the ability's own principal
    pub fn new(ability: &'a Ability, audit: &'a AuditLogger) -> Self {
        let actor_id = ability.principal_id().unwrap_or(ANONYMOUS_ACTOR);
        Self::for_actor(ability, audit, actor_id)
    }

    /// Guard recording events under an explicit actor id
    pub fn for_actor(ability: &'a Ability, audit: &'a AuditLogger, actor_id: &'a str) -> Self {
        Self {
            ability,
            audit,
            actor_id,
        }
    }

    /// Actor id written to audit events
    pub fn actor_id(&self) -> &str {
        self.actor_id
    }

    /// Authorize `action` on `subject`, recording an `access_denied` event on refusal
    pub fn authorize(
        &self,
        action: Action,
        subject: Subject,
        instance: Option<&Value>,
        resource_id: Option<&str>,
    ) -> Result<()> {
        let check = self.ability.check(action, subject, instance);
        if check.granted {
            debug!(actor_id = self.actor_id, %action, %subject, "Access granted");
            return Ok(());
        }

        let reason = check
            .denial_reason
            .unwrap_or_else(|| format!("{} on {} denied", action, subject));

        let mut details = AuditDetails::new();
        details.insert("action".to_string(), Value::from(action.as_str()));
        details.insert("reason".to_string(), Value::from(reason.clone()));
        self.audit
            .access_denied(self.actor_id, subject.as_str(), resource_id, Some(details));

        Err(AuthzError::forbidden(reason))
    }
}

/// Move `target` to `new_role`, returning the updated principal and its fresh ability.
///
/// The changer must hold a role strictly higher than both the target's current
/// role and the new one. Refusals are recorded as `access_denied`; successful
/// changes as `role_changed`. Abilities built for the old role are not touched;
/// callers replace them with the returned one.
pub fn reassign_role(
    audit: &AuditLogger,
    changer: &Principal,
    target: &Principal,
    new_role: Role,
) -> Result<(Principal, Ability)> {
    let old_role = target
        .role()
        .ok_or_else(|| AuthzError::invalid_role(target.role.as_deref()))?;

    let permitted = changer
        .role()
        .is_some_and(|role| role.is_higher_than(old_role) && role.is_higher_than(new_role));

    if !permitted {
        let reason = format!(
            "'{}' may not change role of '{}' from {} to {}",
            changer.id, target.id, old_role, new_role
        );
        warn!(changer = %changer.id, target = %target.id, "Role change refused");

        let mut details = AuditDetails::new();
        details.insert("oldRole".to_string(), Value::from(old_role.as_str()));
        details.insert("newRole".to_string(), Value::from(new_role.as_str()));
        audit.access_denied(&changer.id, USER_ROLE_RESOURCE, Some(&target.id), Some(details));

        return Err(AuthzError::forbidden(reason));
    }

    audit.role_changed(&target.id, old_role, new_role, Some(&changer.id));

    let updated = Principal::with_role(target.id.clone(), new_role);
    let ability = updated.ability();
    Ok((updated, ability))
}
