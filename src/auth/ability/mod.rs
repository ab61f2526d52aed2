//! Ability engine
//!
//! Builds per-principal policy objects from a role and answers fine-grained,
//! instance-aware checks. Every check fails closed: unknown input, a missing
//! instance for an ownership rule, or no matching rule all mean `false`.

mod ability;
mod builder;
mod rule;
mod rules;

pub use ability::{Ability, AbilityCheck};
pub use builder::AbilityBuilder;
pub use rule::{Conditions, Rule};
pub use rules::{build_ability, build_ability_for_claim};
