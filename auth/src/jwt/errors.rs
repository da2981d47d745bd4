use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Signing secret is missing")]
    MissingSecret,

    #[error("Token expiration is out of range")]
    ExpirationOutOfRange,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
