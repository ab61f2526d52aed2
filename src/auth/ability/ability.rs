//! Per-principal policy object

use crate::auth::rbac::Role;
use crate::auth::types::{Action, Subject};
use serde::Serialize;
use serde_json::Value;

use super::rule::Rule;

/// Immutable, per-principal policy answering `(action, subject, instance?)` checks.
///
/// Rules are evaluated newest first and the first matching rule decides, so a
/// later denial overrides an earlier grant. No matching rule means denial.
/// A role change builds a new `Ability`; share one across threads with `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Ability {
    role: Option<Role>,
    principal_id: Option<String>,
    rules: Vec<Rule>,
}

/// Detailed outcome of an ability check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityCheck {
    /// Whether the check passed
    pub granted: bool,
    /// The rule that decided the outcome, if any matched
    pub rule: Option<Rule>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl Ability {
    pub(super) fn from_rules(
        role: Option<Role>,
        principal_id: Option<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            role,
            principal_id,
            rules,
        }
    }

    /// Ability that grants nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Role the ability was built for
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Principal the ability was built for
    pub fn principal_id(&self) -> Option<&str> {
        self.principal_id.as_deref()
    }

    /// Rules in registration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules relevant to an `(action, subject)` pair, ignoring conditions
    pub fn rules_for(&self, action: Action, subject: Subject) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(action, subject))
            .collect()
    }

    /// Detailed check
    pub fn check(&self, action: Action, subject: Subject, instance: Option<&Value>) -> AbilityCheck {
        let deciding = self
            .rules
            .iter()
            .rev()
            .find(|rule| rule.matches(action, subject, instance));

        match deciding {
            Some(rule) if !rule.inverted => AbilityCheck {
                granted: true,
                rule: Some(rule.clone()),
                denial_reason: None,
            },
            Some(rule) => AbilityCheck {
                granted: false,
                rule: Some(rule.clone()),
                denial_reason: Some(format!("Denied by rule: {}", rule)),
            },
            None => AbilityCheck {
                granted: false,
                rule: None,
                denial_reason: Some(format!("No rule grants {} on {}", action, subject)),
            },
        }
    }

    /// Check a single action
    pub fn can(&self, action: Action, subject: Subject, instance: Option<&Value>) -> bool {
        self.check(action, subject, instance).granted
    }

    /// Negation of [`Ability::can`]
    pub fn cannot(&self, action: Action, subject: Subject, instance: Option<&Value>) -> bool {
        !self.can(action, subject, instance)
    }

    /// `true` if any of the listed actions is permitted
    pub fn can_any(&self, actions: &[Action], subject: Subject, instance: Option<&Value>) -> bool {
        actions
            .iter()
            .any(|&action| self.can(action, subject, instance))
    }

    /// Check with untyped action and subject names. Unknown names are denied.
    pub fn can_str(&self, action: &str, subject: &str, instance: Option<&Value>) -> bool {
        match (action.parse::<Action>(), subject.parse::<Subject>()) {
            (Ok(action), Ok(subject)) => self.can(action, subject, instance),
            _ => false,
        }
    }

    /// Check against any serializable record. Records that fail to serialize are denied.
    pub fn can_on<T: Serialize>(&self, action: Action, subject: Subject, resource: &T) -> bool {
        match serde_json::to_value(resource) {
            Ok(instance) => self.can(action, subject, Some(&instance)),
            Err(_) => false,
        }
    }
}
