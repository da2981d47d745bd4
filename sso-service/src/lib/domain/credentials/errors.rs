use std::fmt;

use thiserror::Error;

/// Error for token lifetime validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenTtlError {
    #[error("Token TTL must be positive, got {0} seconds")]
    NotPositive(i64),

    #[error("Token TTL must not exceed {max_days} days")]
    TooLong { max_days: i64 },
}

/// Errors reported by the user and app stores
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("User not found")]
    UserNotFound,

    #[error("App not found")]
    AppNotFound,

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for credential operations
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    /// Unknown email or wrong password. The two are never distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid app id")]
    InvalidAppId,

    #[error("{op}: {message}")]
    Internal { op: &'static str, message: String },
}

impl CredentialError {
    /// Wrap an infrastructure failure with the name of the operation it broke.
    pub fn internal(op: &'static str, cause: impl fmt::Display) -> Self {
        CredentialError::Internal {
            op,
            message: cause.to_string(),
        }
    }
}
