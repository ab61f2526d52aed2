//! # portal-authz
//!
//! Authorization core for a learning portal.
//!
//! ## Features
//!
//! - **Role model**: four totally ordered roles with a static permission table
//! - **Ability engine**: per-principal, instance-aware checks with ownership rules
//! - **Audit log**: bounded, queryable in-memory event log with an operator sink
//! - **Fail closed**: unknown roles, unknown names and missing instances deny
//!
//! ## Quick Start
//!
//! ```rust
//! use portal_authz::{Action, AuditConfig, AuditLogger, Principal, Subject};
//! use serde_json::json;
//!
//! let instructor = Principal::new("u1", Some("instructor"));
//! let ability = instructor.ability();
//!
//! let own = json!({"id": "c1", "instructorId": "u1"});
//! let other = json!({"id": "c2", "instructorId": "u2"});
//! assert!(ability.can(Action::Update, Subject::Course, Some(&own)));
//! assert!(!ability.can(Action::Update, Subject::Course, Some(&other)));
//!
//! let audit = AuditLogger::new(AuditConfig::default());
//! audit.login("u1", None);
//! assert_eq!(audit.events_by_user("u1").len(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod audit;
pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use audit::{AuditAction, AuditEvent, AuditEventInput, AuditLogger, AuditSink, Severity};
pub use auth::{
    Ability, AccessGuard, Action, Permission, Principal, Role, Subject, build_ability,
    has_permission, is_higher_than, roles_lower_than,
};
pub use config::{AuditConfig, AuthzConfig, LoggingConfig};
pub use utils::error::{AuthzError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
