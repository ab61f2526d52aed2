//! Authorization flow integration tests
//!
//! Drives principals through the role model, the ability engine and the
//! access guard the way a request handler would.

#[cfg(test)]
mod tests {
    use crate::common::{CourseFactory, PrincipalFactory, quiet_logger, user_record};
    use crate::{assert_err, assert_ok};
    use portal_authz::audit::AuditAction;
    use portal_authz::auth::guard::reassign_role;
    use portal_authz::auth::rbac::{RoleModel, permissions_for_role};
    use portal_authz::{
        AccessGuard, Action, AuthzError, Permission, Role, Subject, has_permission,
        is_higher_than, roles_lower_than,
    };
    use std::sync::Arc;

    // ==================== Role model ====================

    #[test]
    fn test_role_model_and_ability_agree() {
        for role in Role::ALL {
            let principal = portal_authz::Principal::with_role("u1", role);
            let ability = principal.ability();
            let own_course = CourseFactory::json_owned_by("c1", "u1");
            let own_profile = user_record("u1");
            for permission in Permission::ALL {
                let (action, subject) = permission.capability();
                let instance = match subject {
                    Subject::User => &own_profile,
                    _ => &own_course,
                };
                if has_permission(Some(role.as_str()), permission) {
                    assert!(
                        ability.can(action, subject, Some(instance)),
                        "{role} holds {permission} but the ability refuses it"
                    );
                }
            }
        }
    }

    #[test]
    fn test_profile_permission_needs_own_user_record() {
        for role in [Role::Student, Role::Instructor] {
            let ability = portal_authz::Principal::with_role("u1", role).ability();
            assert!(has_permission(Some(role.as_str()), Permission::UpdateProfile));
            assert!(ability.can(Action::Update, Subject::User, Some(&user_record("u1"))));
            // A course record carries the course id, not the user's
            let course = CourseFactory::json_owned_by("c1", "u1");
            assert!(!ability.can(Action::Update, Subject::User, Some(&course)));
        }
    }

    #[test]
    fn test_claim_strings_at_the_boundary() {
        assert!(is_higher_than(Some("super_admin"), Some("admin")));
        assert!(!is_higher_than(Some("admin"), Some("admin")));
        assert!(!is_higher_than(Some("janitor"), Some("student")));
        assert_eq!(
            roles_lower_than(Some("admin")),
            vec![Role::Student, Role::Instructor]
        );
        assert!(roles_lower_than(Some("janitor")).is_empty());

        let err = assert_err!(permissions_for_role(Some("janitor")));
        assert!(err.is_invalid_role());
        let perms = assert_ok!(permissions_for_role(Some("instructor")));
        assert!(perms.contains(&Permission::DeleteCourse));
        assert!(!perms.contains(&Permission::ManageCourses));
    }

    #[test]
    fn test_assignable_roles_match_hierarchy() {
        assert!(RoleModel::assignable_roles(Role::Student).is_empty());
        assert_eq!(
            RoleModel::assignable_roles(Role::SuperAdmin),
            vec![Role::Student, Role::Instructor, Role::Admin]
        );
    }

    // ==================== Ability engine ====================

    #[test]
    fn test_instructor_course_lifecycle() {
        let instructor = PrincipalFactory::instructor("inst-1");
        let ability = instructor.ability();
        let mine = CourseFactory::owned_by("c1", "inst-1");
        let theirs = CourseFactory::owned_by("c2", "inst-2");

        assert!(ability.can(Action::Create, Subject::Course, None));
        assert!(ability.can_on(Action::Read, Subject::Course, &theirs));
        assert!(ability.can_on(Action::Update, Subject::Course, &mine));
        assert!(ability.can_on(Action::Delete, Subject::Course, &mine));
        assert!(!ability.can_on(Action::Update, Subject::Course, &theirs));
        assert!(!ability.can_on(Action::Delete, Subject::Course, &theirs));

        // Ownership rules never match without an instance
        assert!(!ability.can(Action::Update, Subject::Course, None));
    }

    #[test]
    fn test_student_profile_and_courses() {
        let student = PrincipalFactory::student("s1");
        let ability = student.ability();

        assert!(ability.can(Action::Read, Subject::Course, None));
        assert!(ability.can(Action::Update, Subject::User, Some(&user_record("s1"))));
        assert!(!ability.can(Action::Update, Subject::User, Some(&user_record("s2"))));
        assert!(!ability.can(Action::Create, Subject::Course, None));
        assert!(!ability.can(Action::Read, Subject::Analytics, None));
    }

    #[test]
    fn test_admin_and_super_admin_on_system() {
        let admin = PrincipalFactory::admin("a1").ability();
        let root = PrincipalFactory::super_admin("root").ability();

        assert!(admin.can(Action::Delete, Subject::Course, None));
        assert!(admin.can(Action::Update, Subject::User, Some(&user_record("anyone"))));
        assert!(admin.can(Action::Read, Subject::Analytics, None));
        assert!(!admin.can(Action::Read, Subject::System, None));
        assert!(!admin.can(Action::Manage, Subject::System, None));

        assert!(root.can(Action::Delete, Subject::System, None));
        assert!(root.can_str("manage", "all", None));
    }

    #[test]
    fn test_bogus_claim_grants_nothing() {
        let principal = PrincipalFactory::with_bogus_claim("x");
        let ability = principal.ability();
        for action in Action::ALL {
            assert!(ability.cannot(action, Subject::Course, None));
            assert!(ability.cannot(action, Subject::User, Some(&user_record("x"))));
        }
    }

    #[test]
    fn test_multi_action_or() {
        let ability = PrincipalFactory::student("s1").ability();
        assert!(ability.can_any(&[Action::Delete, Action::Read], Subject::Course, None));
        assert!(!ability.can_any(&[Action::Delete, Action::Create], Subject::Course, None));
        assert!(!ability.can_any(&[], Subject::Course, None));
    }

    #[test]
    fn test_ability_shared_across_threads() {
        let ability = Arc::new(PrincipalFactory::instructor("inst-1").ability());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let ability = Arc::clone(&ability);
                std::thread::spawn(move || {
                    let owner = if i % 2 == 0 { "inst-1" } else { "inst-2" };
                    let course = CourseFactory::json_owned_by("c", owner);
                    ability.can(Action::Update, Subject::Course, Some(&course)) == (i % 2 == 0)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    // ==================== Guarded access ====================

    #[test]
    fn test_guard_records_only_denials() {
        let audit = quiet_logger(100);
        let instructor = PrincipalFactory::instructor("inst-1");
        let ability = instructor.ability();
        let guard = AccessGuard::new(&ability, &audit);

        let mine = CourseFactory::json_owned_by("c1", "inst-1");
        let theirs = CourseFactory::json_owned_by("c2", "inst-2");

        assert_ok!(guard.authorize(Action::Update, Subject::Course, Some(&mine), Some("c1")));
        let err = assert_err!(guard.authorize(
            Action::Update,
            Subject::Course,
            Some(&theirs),
            Some("c2")
        ));
        assert!(matches!(err, AuthzError::Forbidden(_)));

        let events = audit.security_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, AuditAction::AccessDenied);
        assert_eq!(events[0].resource_id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_promotion_then_new_ability() {
        let audit = quiet_logger(100);
        let admin = PrincipalFactory::admin("a1");
        let student = PrincipalFactory::student("s1");

        assert!(!student.ability().can(Action::Create, Subject::Course, None));

        let (promoted, ability) =
            assert_ok!(reassign_role(&audit, &admin, &student, Role::Instructor));
        assert_eq!(promoted.id, "s1");
        assert!(ability.can(Action::Create, Subject::Course, None));

        let changes = audit.events_by_action(AuditAction::RoleChanged);
        assert_eq!(changes.len(), 1);
        let details = changes[0].details.as_ref().unwrap();
        assert_eq!(details["oldRole"], "student");
        assert_eq!(details["newRole"], "instructor");
        assert_eq!(details["changedBy"], "a1");
    }

    #[test]
    fn test_instructor_cannot_promote() {
        let audit = quiet_logger(100);
        let instructor = PrincipalFactory::instructor("inst-1");
        let student = PrincipalFactory::student("s1");

        let err = assert_err!(reassign_role(&audit, &instructor, &student, Role::Instructor));
        assert!(matches!(err, AuthzError::Forbidden(_)));
        assert!(audit.events_by_action(AuditAction::RoleChanged).is_empty());
        assert_eq!(audit.events_by_user("inst-1").len(), 1);
    }
}
