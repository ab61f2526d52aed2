//! Role-Based Access Control (RBAC) role model
//!
//! Single source of truth for what a role can do in general. Instance-level
//! rules live in [`crate::auth::ability`].

mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and functions
pub use permissions::{has_all_permissions, has_any_permission, has_permission, permissions_for_role};
pub use roles::{is_higher_than, roles_lower_than};
pub use system::RoleModel;
pub use types::{Permission, Role, RoleDefinition};
