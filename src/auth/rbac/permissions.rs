//! Permission table and permission checks

use crate::utils::error::{AuthzError, Result};
use std::collections::HashSet;

use super::types::{Permission, Role};

const STUDENT_PERMISSIONS: &[Permission] = &[
    Permission::ReadCourse,
    Permission::ReadUser,
    Permission::UpdateProfile,
];

const INSTRUCTOR_PERMISSIONS: &[Permission] = &[
    Permission::ReadCourse,
    Permission::ReadUser,
    Permission::UpdateProfile,
    Permission::CreateCourse,
    Permission::UpdateCourse,
    Permission::DeleteCourse,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ReadCourse,
    Permission::ReadUser,
    Permission::UpdateProfile,
    Permission::CreateCourse,
    Permission::UpdateCourse,
    Permission::DeleteCourse,
    Permission::ManageCourses,
    Permission::ManageUsers,
    Permission::ViewAnalytics,
];

const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ReadCourse,
    Permission::ReadUser,
    Permission::UpdateProfile,
    Permission::CreateCourse,
    Permission::UpdateCourse,
    Permission::DeleteCourse,
    Permission::ManageCourses,
    Permission::ManageUsers,
    Permission::ViewAnalytics,
    Permission::ManageSystem,
];

impl Role {
    /// Static permission set for this role
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Student => STUDENT_PERMISSIONS,
            Role::Instructor => INSTRUCTOR_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
            Role::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        }
    }

    /// Check if this role carries a permission
    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

/// Get the permission set for a raw role claim.
///
/// Strict entry point for admin tooling: any value outside the role
/// enumeration, including a missing claim, is an [`AuthzError::InvalidRole`].
pub fn permissions_for_role(role: Option<&str>) -> Result<HashSet<Permission>> {
    let parsed = Role::from_claim(role).ok_or_else(|| AuthzError::invalid_role(role))?;
    Ok(parsed.permissions().iter().copied().collect())
}

/// Check if a raw role claim carries a permission.
///
/// Never fails: unknown or missing roles have no permissions.
pub fn has_permission(role: Option<&str>, permission: Permission) -> bool {
    permissions_for_role(role)
        .map(|permissions| permissions.contains(&permission))
        .unwrap_or(false)
}

/// Check if a raw role claim carries every listed permission
pub fn has_all_permissions(role: Option<&str>, required: &[Permission]) -> bool {
    match permissions_for_role(role) {
        Ok(permissions) => required.iter().all(|p| permissions.contains(p)),
        Err(_) => false,
    }
}

/// Check if a raw role claim carries at least one listed permission
pub fn has_any_permission(role: Option<&str>, required: &[Permission]) -> bool {
    match permissions_for_role(role) {
        Ok(permissions) => required.iter().any(|p| permissions.contains(p)),
        Err(_) => false,
    }
}
