//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `authz_validators`: Audit and logging validators

mod authz_validators;
mod trait_def;

pub use trait_def::Validate;
