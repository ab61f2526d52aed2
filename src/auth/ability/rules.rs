//! Role to rule-set mapping

use crate::auth::rbac::Role;
use crate::auth::types::{Action, Subject};
use tracing::debug;

use super::ability::Ability;
use super::builder::AbilityBuilder;
use super::rule::Conditions;

/// Build the ability for a role and optional principal.
///
/// Never fails: without a role the ability grants nothing. Ownership rules
/// are only registered when a principal id is known.
pub fn build_ability(role: Option<Role>, principal_id: Option<&str>) -> Ability {
    let builder = AbilityBuilder::new().for_principal(role, principal_id);

    let builder = match role {
        Some(Role::Student) => student_rules(builder, principal_id),
        Some(Role::Instructor) => instructor_rules(builder, principal_id),
        Some(Role::Admin) => admin_rules(builder),
        Some(Role::SuperAdmin) => super_admin_rules(builder),
        None => builder,
    };

    debug!(
        role = role.map(|r| r.as_str()),
        rules = builder.len(),
        "Built ability"
    );
    builder.build()
}

/// Build the ability for an untyped role claim; unknown claims get no rules
pub fn build_ability_for_claim(role: Option<&str>, principal_id: Option<&str>) -> Ability {
    build_ability(Role::from_claim(role), principal_id)
}

fn student_rules(builder: AbilityBuilder, principal_id: Option<&str>) -> AbilityBuilder {
    let builder = builder
        .can(&[Action::Read], Subject::Course)
        .can(&[Action::Read], Subject::User);

    match principal_id {
        Some(id) => builder.can_if(
            &[Action::Update],
            Subject::User,
            Conditions::new().field("id", id),
        ),
        None => builder,
    }
}

fn instructor_rules(builder: AbilityBuilder, principal_id: Option<&str>) -> AbilityBuilder {
    let builder = student_rules(builder, principal_id)
        .can(&[Action::Read, Action::Create], Subject::Course);

    match principal_id {
        Some(id) => builder.can_if(
            &[Action::Update, Action::Delete],
            Subject::Course,
            Conditions::new().field("instructorId", id),
        ),
        None => builder,
    }
}

fn admin_rules(builder: AbilityBuilder) -> AbilityBuilder {
    // Admins never reach System, whatever else is granted.
    builder
        .can(&[Action::Manage], Subject::Course)
        .can(&[Action::Manage], Subject::User)
        .can(&[Action::Read], Subject::Analytics)
        .cannot(&[Action::Manage], Subject::System)
}

fn super_admin_rules(builder: AbilityBuilder) -> AbilityBuilder {
    builder.can(&[Action::Manage], Subject::All)
}
