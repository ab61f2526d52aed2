//! Authorization
//!
//! Two layers: the coarse role model in [`rbac`] and the instance-aware
//! [`ability`] engine derived from it. [`principal`] is the identity boundary
//! and [`guard`] pairs decisions with audit records.

pub mod ability;
pub mod guard;
pub mod principal;
pub mod rbac;
pub mod types;

pub use ability::{Ability, AbilityBuilder, AbilityCheck, Conditions, Rule, build_ability};
pub use guard::{AccessGuard, reassign_role};
pub use principal::Principal;
pub use rbac::{Permission, Role, has_permission, is_higher_than, roles_lower_than};
pub use types::{Action, Subject};
