//! Ability builder

use crate::auth::rbac::Role;
use crate::auth::types::{Action, Subject};

use super::ability::Ability;
use super::rule::{Conditions, Rule};

/// Collects rules in registration order and freezes them into an [`Ability`].
///
/// Consumed by [`AbilityBuilder::build`], so no rule can be added to an
/// ability once it exists.
#[derive(Debug, Clone, Default)]
pub struct AbilityBuilder {
    role: Option<Role>,
    principal_id: Option<String>,
    rules: Vec<Rule>,
}

impl AbilityBuilder {
    /// Create a builder with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Record who the ability is built for
    pub fn for_principal(mut self, role: Option<Role>, principal_id: Option<&str>) -> Self {
        self.role = role;
        self.principal_id = principal_id.map(str::to_string);
        self
    }

    /// Grant actions on a subject
    pub fn can(self, actions: &[Action], subject: Subject) -> Self {
        self.push(actions, subject, None, false)
    }

    /// Grant actions on instances of a subject that satisfy `conditions`
    pub fn can_if(self, actions: &[Action], subject: Subject, conditions: Conditions) -> Self {
        self.push(actions, subject, Some(conditions), false)
    }

    /// Deny actions on a subject, overriding earlier grants
    pub fn cannot(self, actions: &[Action], subject: Subject) -> Self {
        self.push(actions, subject, None, true)
    }

    /// Deny actions on instances of a subject that satisfy `conditions`
    pub fn cannot_if(self, actions: &[Action], subject: Subject, conditions: Conditions) -> Self {
        self.push(actions, subject, Some(conditions), true)
    }

    /// Number of rules registered so far
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules have been registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freeze the rules into an immutable ability
    pub fn build(self) -> Ability {
        Ability::from_rules(self.role, self.principal_id, self.rules)
    }

    fn push(
        mut self,
        actions: &[Action],
        subject: Subject,
        conditions: Option<Conditions>,
        inverted: bool,
    ) -> Self {
        for &action in actions {
            self.rules.push(Rule {
                action,
                subject,
                conditions: conditions.clone(),
                inverted,
            });
        }
        self
    }
}
