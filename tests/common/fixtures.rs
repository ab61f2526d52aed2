//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use portal_authz::{AuditConfig, AuditLogger, Principal, Role};
use serde::Serialize;
use serde_json::{Value, json};

/// Factory for principals
pub struct PrincipalFactory;

impl PrincipalFactory {
    pub fn student(id: &str) -> Principal {
        Principal::with_role(id, Role::Student)
    }

    pub fn instructor(id: &str) -> Principal {
        Principal::with_role(id, Role::Instructor)
    }

    pub fn admin(id: &str) -> Principal {
        Principal::with_role(id, Role::Admin)
    }

    pub fn super_admin(id: &str) -> Principal {
        Principal::with_role(id, Role::SuperAdmin)
    }

    /// Principal whose claim is outside the role enumeration
    pub fn with_bogus_claim(id: &str) -> Principal {
        Principal::new(id, Some("janitor"))
    }
}

/// Course record as the host application stores it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCourse {
    pub id: String,
    pub title: String,
    pub instructor_id: String,
}

/// Factory for course records
pub struct CourseFactory;

impl CourseFactory {
    pub fn owned_by(id: &str, instructor_id: &str) -> TestCourse {
        TestCourse {
            id: id.to_string(),
            title: format!("Course {}", id),
            instructor_id: instructor_id.to_string(),
        }
    }

    pub fn json_owned_by(id: &str, instructor_id: &str) -> Value {
        json!({"id": id, "title": format!("Course {}", id), "instructorId": instructor_id})
    }
}

/// User record as a JSON instance
pub fn user_record(id: &str) -> Value {
    json!({"id": id, "email": format!("{}@example.com", id)})
}

/// Audit logger with the operator sink disabled
pub fn quiet_logger(max_events: usize) -> AuditLogger {
    AuditLogger::new(AuditConfig {
        max_events,
        console_enabled: false,
    })
}
