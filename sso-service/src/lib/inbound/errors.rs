use crate::credentials::errors::CredentialError;
use crate::inbound::validation::ValidationError;

/// Transport-neutral failure categories.
///
/// Each transport renders these in its own status vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidArgument(String),
    Conflict(String),
    NotFound(String),
    /// Details are logged, never sent to the caller.
    Internal,
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidArgument(msg) | ApiError::Conflict(msg) | ApiError::NotFound(msg) => {
                msg.as_str()
            }
            ApiError::Internal => "internal error",
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidArgument(err.to_string())
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::UserAlreadyExists(_) => {
                ApiError::Conflict("user already exists".to_string())
            }
            CredentialError::InvalidCredentials => {
                ApiError::InvalidArgument("invalid email or password".to_string())
            }
            CredentialError::UserNotFound | CredentialError::InvalidAppId => {
                ApiError::NotFound("user not found".to_string())
            }
            CredentialError::Internal { .. } => {
                tracing::error!(error = %err, "request failed");
                ApiError::Internal
            }
        }
    }
}
