//! RBAC type definitions

use crate::auth::types::{Action, Subject};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal role, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Learner enrolled in courses
    Student,
    /// Course author
    Instructor,
    /// Portal administrator
    Admin,
    /// Platform owner
    SuperAdmin,
}

impl Role {
    /// Every role in hierarchy order
    pub const ALL: [Role; 4] = [Role::Student, Role::Instructor, Role::Admin, Role::SuperAdmin];

    /// Position in the hierarchy; higher is more privileged
    pub fn level(self) -> usize {
        match self {
            Role::Student => 0,
            Role::Instructor => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
        }
    }

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Validate an untyped role claim. Anything outside the enumeration is `None`.
    pub fn from_claim(claim: Option<&str>) -> Option<Role> {
        claim.and_then(|c| c.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Coarse, role-level capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ReadCourse,
    CreateCourse,
    UpdateCourse,
    DeleteCourse,
    ManageCourses,
    ReadUser,
    UpdateProfile,
    ManageUsers,
    ViewAnalytics,
    ManageSystem,
}

impl Permission {
    /// Every permission
    pub const ALL: [Permission; 10] = [
        Permission::ReadCourse,
        Permission::CreateCourse,
        Permission::UpdateCourse,
        Permission::DeleteCourse,
        Permission::ManageCourses,
        Permission::ReadUser,
        Permission::UpdateProfile,
        Permission::ManageUsers,
        Permission::ViewAnalytics,
        Permission::ManageSystem,
    ];

    /// The `(action, subject)` pair this permission corresponds to in the ability engine
    pub fn capability(self) -> (Action, Subject) {
        match self {
            Permission::ReadCourse => (Action::Read, Subject::Course),
            Permission::CreateCourse => (Action::Create, Subject::Course),
            Permission::UpdateCourse => (Action::Update, Subject::Course),
            Permission::DeleteCourse => (Action::Delete, Subject::Course),
            Permission::ManageCourses => (Action::Manage, Subject::Course),
            Permission::ReadUser => (Action::Read, Subject::User),
            Permission::UpdateProfile => (Action::Update, Subject::User),
            Permission::ManageUsers => (Action::Manage, Subject::User),
            Permission::ViewAnalytics => (Action::Read, Subject::Analytics),
            Permission::ManageSystem => (Action::Manage, Subject::System),
        }
    }

    /// Wire name of the permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadCourse => "read_course",
            Permission::CreateCourse => "create_course",
            Permission::UpdateCourse => "update_course",
            Permission::DeleteCourse => "delete_course",
            Permission::ManageCourses => "manage_courses",
            Permission::ReadUser => "read_user",
            Permission::UpdateProfile => "update_profile",
            Permission::ManageUsers => "manage_users",
            Permission::ViewAnalytics => "view_analytics",
            Permission::ManageSystem => "manage_system",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Invalid permission: {}", s))
    }
}

/// Role definition, as listed by admin tooling
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    /// Role
    pub role: Role,
    /// Role description
    pub description: &'static str,
    /// Permissions granted by this role
    pub permissions: Vec<Permission>,
    /// Roles strictly below this one
    pub inherits_from: Vec<Role>,
}
