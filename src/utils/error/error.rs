//! Error handling for the authorization core
//!
//! Denials are not errors. `can`/`has_permission` style checks resolve to
//! `false`; only configuration mistakes and explicit guard refusals surface here.

use thiserror::Error;

/// Result type alias for the authorization core
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization core
#[derive(Error, Debug)]
pub enum AuthzError {
    /// A role value outside the known enumeration reached a strict entry point
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Access refused by a guard
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Operator-facing audit sink failures
    #[error("Audit sink error: {0}")]
    Sink(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuthzError {
    /// Create an invalid role error
    pub fn invalid_role(role: Option<&str>) -> Self {
        match role {
            Some(role) => Self::InvalidRole(format!("'{}' is not a known role", role)),
            None => Self::InvalidRole("no role provided".to_string()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }

    /// Whether this error reports a misconfigured role
    pub fn is_invalid_role(&self) -> bool {
        matches!(self, Self::InvalidRole(_))
    }
}
