//! Core error types for the Vaultboard dashboard.
//!
//! Missing or malformed on-chain amounts are not errors: they are carried as
//! [`ScaledAmount::Unknown`](crate::amounts::ScaledAmount) and rendered as a
//! placeholder. The variants below cover lookups, configuration and shared
//! state only.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Store access failed: {0}")]
    Store(String),
}

/// Validation errors for configuration input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
