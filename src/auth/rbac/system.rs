//! Role catalog for admin tooling

use tracing::debug;

use super::types::{Role, RoleDefinition};

/// Read-only catalog over the static role table
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleModel;

impl RoleModel {
    /// Describe a single role
    pub fn describe(role: Role) -> RoleDefinition {
        RoleDefinition {
            role,
            description: Self::description(role),
            permissions: role.permissions().to_vec(),
            inherits_from: role.roles_lower_than(),
        }
    }

    /// List every role in hierarchy order
    pub fn list_roles() -> Vec<RoleDefinition> {
        let roles: Vec<RoleDefinition> = Role::ALL.into_iter().map(Self::describe).collect();
        debug!("Listed {} roles", roles.len());
        roles
    }

    /// Roles `actor` may assign to someone else: strictly lower ones only
    pub fn assignable_roles(actor: Role) -> Vec<Role> {
        actor.roles_lower_than()
    }

    fn description(role: Role) -> &'static str {
        match role {
            Role::Student => "Learner with read access to courses and their own profile",
            Role::Instructor => "Course author who manages the courses they own",
            Role::Admin => "Administrator for courses, users and analytics",
            Role::SuperAdmin => "Platform owner with full system access",
        }
    }
}
