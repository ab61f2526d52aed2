//! Integration tests for portal-authz
//!
//! These tests drive the public API and verify that the role model, the
//! ability engine and the audit log agree with each other.

pub mod audit_log_tests;
pub mod authorization_flow_tests;
pub mod config_tests;
