use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde::Serialize;

use super::errors::JwtError;

/// Signs claims into compact JWT strings.
///
/// The signing key is supplied per call, since every application
/// registered with the SSO has its own secret. Uses HS256.
#[derive(Debug, Clone)]
pub struct TokenMinter {
    algorithm: Algorithm,
}

impl TokenMinter {
    /// Create a new minter using HS256.
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode and sign claims into a JWT token.
    ///
    /// Identical claims and secret always produce the identical token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    /// * `secret` - HMAC secret of the issuing application
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `EncodingFailed` - Token encoding failed
    pub fn mint<T: Serialize>(&self, claims: &T, secret: &[u8]) -> Result<String, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        let header = Header::new(self.algorithm);

        encode(&header, claims, &EncodingKey::from_secret(secret))
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}

impl Default for TokenMinter {
    fn default() -> Self {
        Self::new()
    }
}
