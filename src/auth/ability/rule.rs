//! Grant/deny rules and instance conditions

use crate::auth::types::{Action, Subject};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Equality-only field match against a candidate instance.
///
/// An instance satisfies the conditions when it is a JSON object and every
/// listed field is present with exactly the expected value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Conditions(BTreeMap<String, Value>);

impl Conditions {
    /// Create an empty condition set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field that must equal `expected`
    pub fn field(mut self, name: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.0.insert(name.into(), expected.into());
        self
    }

    /// Expected value for a field, if constrained
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether no fields are constrained
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check a candidate instance against every field
    pub fn matches(&self, instance: &Value) -> bool {
        let Some(object) = instance.as_object() else {
            return false;
        };
        self.0
            .iter()
            .all(|(field, expected)| object.get(field) == Some(expected))
    }
}

/// Single entry in an ability's ordered rule list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Action the rule is written for
    pub action: Action,
    /// Subject the rule is written for
    pub subject: Subject,
    /// Instance conditions; `None` applies to every instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
    /// `true` for a denial
    pub inverted: bool,
}

impl Rule {
    /// Unconditional grant
    pub fn allow(action: Action, subject: Subject) -> Self {
        Self {
            action,
            subject,
            conditions: None,
            inverted: false,
        }
    }

    /// Unconditional denial
    pub fn deny(action: Action, subject: Subject) -> Self {
        Self {
            inverted: true,
            ..Self::allow(action, subject)
        }
    }

    /// Attach instance conditions
    pub fn when(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Whether the rule is instance-scoped
    pub fn is_conditional(&self) -> bool {
        self.conditions.is_some()
    }

    /// Whether the rule is relevant to an `(action, subject)` pair, ignoring conditions
    pub fn applies_to(&self, action: Action, subject: Subject) -> bool {
        self.action.covers(action) && self.subject.covers(subject)
    }

    /// Whether the rule matches a check.
    ///
    /// Conditional rules never match when no instance is supplied.
    pub fn matches(&self, action: Action, subject: Subject, instance: Option<&Value>) -> bool {
        if !self.applies_to(action, subject) {
            return false;
        }
        match (&self.conditions, instance) {
            (None, _) => true,
            (Some(conditions), Some(instance)) => conditions.matches(instance),
            (Some(_), None) => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.inverted { "cannot" } else { "can" };
        write!(f, "{} {} {}", verb, self.action, self.subject)?;
        if let Some(conditions) = &self.conditions {
            let json = serde_json::to_string(conditions).map_err(|_| fmt::Error)?;
            write!(f, " where {}", json)?;
        }
        Ok(())
    }
}
