//! Audit log integration tests

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::quiet_logger;
    use chrono::{Duration, Utc};
    use portal_authz::audit::{AUTHENTICATION_RESOURCE, AuditDetails, USER_ROLE_RESOURCE};
    use portal_authz::{AuditAction, AuditEvent, AuditEventInput, Role, Severity};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_session_story() {
        let audit = quiet_logger(100);

        audit.login_failed("u1", None);
        audit.login("u1", None);
        audit.resource_access("u1", "Course", "c1", "read");
        audit.access_denied("u1", "Course", Some("c2"), None);
        audit.logout("u1", None);

        let actions: Vec<AuditAction> = audit
            .events_by_user("u1")
            .into_iter()
            .map(|e| e.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                AuditAction::LoginFailed,
                AuditAction::Login,
                AuditAction::ResourceAccessed,
                AuditAction::AccessDenied,
                AuditAction::Logout,
            ]
        );

        assert_eq!(audit.events_by_resource(AUTHENTICATION_RESOURCE).len(), 3);

        let security = audit.security_events();
        assert_eq!(security.len(), 2);
        assert_eq!(security[0].severity, Severity::Error);
        assert_eq!(security[1].severity, Severity::Warning);

        let stats = audit.stats();
        assert_eq!(stats.retained, 5);
        assert_eq!(stats.info, 3);
        assert_eq!(stats.warning, 1);
        assert_eq!(stats.error, 1);
    }

    #[test]
    fn test_fifo_eviction_keeps_newest() {
        let audit = quiet_logger(3);
        for i in 0..5 {
            audit.resource_access("u1", "Course", &format!("c{}", i), "read");
        }

        let ids: Vec<String> = audit
            .events()
            .into_iter()
            .filter_map(|e| e.resource_id)
            .collect();
        assert_eq!(ids, vec!["c2", "c3", "c4"]);
        assert_eq!(audit.total_recorded(), 5);
    }

    #[test]
    fn test_eviction_ignores_severity() {
        let audit = quiet_logger(2);
        audit.login_failed("u1", None);
        audit.login("u1", None);
        audit.login("u1", None);

        assert!(audit.events_by_severity(Severity::Error).is_empty());
        assert_eq!(audit.len(), 2);
    }

    #[test]
    fn test_role_change_event_shape() {
        let audit = quiet_logger(10);
        let event = audit.role_changed("u7", Role::Student, Role::Admin, Some("root"));

        assert_eq!(event.resource, USER_ROLE_RESOURCE);
        assert_eq!(event.severity, Severity::Warning);
        let details = event.details.as_ref().unwrap();
        assert_eq!(details["oldRole"], "student");
        assert_eq!(details["newRole"], "admin");
        assert_eq!(details["changedBy"], "root");
    }

    #[test]
    fn test_custom_event_and_range_query() {
        let audit = quiet_logger(10);
        let before = Utc::now() - Duration::seconds(1);

        let mut details = AuditDetails::new();
        details.insert("format".to_string(), json!("csv"));
        let event = audit.record(
            AuditEventInput::new(AuditAction::ResourceCreated, "Analytics")
                .actor("a1")
                .actor_role(Role::Admin)
                .session("sess-1")
                .details(details),
        );
        assert_eq!(event.severity, Severity::Info);
        assert!(event.id.starts_with("audit_"));

        let after = Utc::now() + Duration::seconds(1);
        assert_eq!(audit.events_in_range(before, after).len(), 1);
        assert!(audit.events_in_range(after, after + Duration::seconds(5)).is_empty());
    }

    #[test]
    fn test_export_json_uses_camel_case() {
        let audit = quiet_logger(10);
        audit.permission_granted("a1", "Course", Some("c1"), None);

        let exported = assert_ok!(audit.export_json());
        assert!(exported.contains("\"actorId\""));
        assert!(exported.contains("\"resourceId\""));
        assert!(exported.contains("\"permission_granted\""));

        let parsed: Vec<AuditEvent> = assert_ok!(serde_json::from_str(&exported));
        assert_eq!(parsed, audit.events());
    }

    #[test]
    fn test_clear_resets_log() {
        let audit = quiet_logger(10);
        audit.login("u1", None);
        audit.clear();
        assert!(audit.is_empty());
        assert_eq!(audit.total_recorded(), 0);
        assert!(audit.recent(5).is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_recording_respects_capacity() {
        let audit = Arc::new(quiet_logger(50));
        let mut handles = Vec::new();

        for worker in 0..8 {
            let audit = Arc::clone(&audit);
            handles.push(tokio::spawn(async move {
                for i in 0..25 {
                    audit.resource_access(
                        &format!("worker-{}", worker),
                        "Course",
                        &format!("c{}", i),
                        "read",
                    );
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(audit.len(), 50);
        assert_eq!(audit.total_recorded(), 200);

        let mut ids: Vec<String> = audit.events().into_iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
