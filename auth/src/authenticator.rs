use serde::Serialize;

use crate::jwt::JwtError;
use crate::jwt::TokenMinter;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT minting.
///
/// Holds no keys: tokens are signed with the secret passed to
/// [`Authenticator::issue_token`].
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_minter: TokenMinter,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator.
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_minter: TokenMinter::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: &[u8],
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Burn the cost of a verification for an account that does not exist.
    pub fn reject_unknown(&self, password: &str) {
        self.password_hasher.dummy_verify(password);
    }

    /// Mint a signed token.
    ///
    /// # Arguments
    /// * `claims` - JWT claims to encode
    /// * `secret` - Signing secret
    ///
    /// # Errors
    /// * `JwtError` - Secret missing or encoding failed
    pub fn issue_token<T: Serialize>(&self, claims: &T, secret: &[u8]) -> Result<String, JwtError> {
        self.token_minter.mint(claims, secret)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}
