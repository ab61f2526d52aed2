//! Role hierarchy

use super::types::Role;

impl Role {
    /// Strict hierarchy comparison
    pub fn is_higher_than(self, other: Role) -> bool {
        self.level() > other.level()
    }

    /// Roles strictly below this one, lowest first
    pub fn roles_lower_than(self) -> Vec<Role> {
        Role::ALL[..self.level()].to_vec()
    }
}

/// Compare two raw role claims. Unknown or missing roles are never higher,
/// and nothing is higher than an unknown role.
pub fn is_higher_than(role_a: Option<&str>, role_b: Option<&str>) -> bool {
    match (Role::from_claim(role_a), Role::from_claim(role_b)) {
        (Some(a), Some(b)) => a.is_higher_than(b),
        _ => false,
    }
}

/// Roles strictly below a raw role claim, lowest first. Empty for unknown roles.
pub fn roles_lower_than(role: Option<&str>) -> Vec<Role> {
    Role::from_claim(role)
        .map(Role::roles_lower_than)
        .unwrap_or_default()
}
