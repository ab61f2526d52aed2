//! Authenticated principal as issued by the identity provider

use serde::{Deserialize, Serialize};

use super::ability::{Ability, build_ability};
use super::rbac::Role;

/// Principal handed over by the identity provider.
///
/// The role arrives as an untyped claim and is only trusted after
/// [`Principal::role`] validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable user id
    pub id: String,
    /// Raw role claim
    #[serde(default)]
    pub role: Option<String>,
}

impl Principal {
    /// Create a principal from an id and raw role claim
    pub fn new(id: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            id: id.into(),
            role: role.map(str::to_string),
        }
    }

    /// Create a principal holding a known role
    pub fn with_role(id: impl Into<String>, role: Role) -> Self {
        Self::new(id, Some(role.as_str()))
    }

    /// Validated role; `None` when the claim is missing or not a known role
    pub fn role(&self) -> Option<Role> {
        Role::from_claim(self.role.as_deref())
    }

    /// Build the ability for this principal
    pub fn ability(&self) -> Ability {
        build_ability(self.role(), Some(&self.id))
    }
}
