//! Credential primitives for the SSO service
//!
//! - Password hashing (Argon2id, PHC strings)
//! - JWT minting (HS256, per-application secret)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", hash.as_bytes()).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Minting a Token
//! ```
//! use auth::{Claims, TokenMinter};
//! use chrono::{Duration, Utc};
//!
//! let minter = TokenMinter::new();
//! let claims = Claims::for_user(1, "alice@example.com", 7, Duration::hours(1), Utc::now()).unwrap();
//! let token = minter.mint(&claims, b"app_secret").unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenMinter;
pub use password::PasswordError;
pub use password::PasswordHasher;
