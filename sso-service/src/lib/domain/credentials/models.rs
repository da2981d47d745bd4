use std::fmt;

use chrono::Duration;

use crate::credentials::errors::TokenTtlError;

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// PHC string bytes, never the plaintext
    pub pass_hash: Vec<u8>,
}

/// Store-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Application registered with the SSO.
///
/// Created out of band; tokens issued for it are signed with `secret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: String,
}

/// Application identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifetime of issued tokens. Strictly positive and at most
/// [`TokenTtl::MAX_DAYS`] days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTtl(Duration);

impl TokenTtl {
    pub const MAX_DAYS: i64 = 365;

    /// Create a validated token lifetime.
    ///
    /// # Errors
    /// * `NotPositive` - Duration is zero or negative
    /// * `TooLong` - Duration exceeds [`TokenTtl::MAX_DAYS`]
    pub fn new(ttl: Duration) -> Result<Self, TokenTtlError> {
        if ttl <= Duration::zero() {
            return Err(TokenTtlError::NotPositive(ttl.num_seconds()));
        }
        if ttl > Duration::days(Self::MAX_DAYS) {
            return Err(Self::too_long());
        }
        Ok(Self(ttl))
    }

    /// Create a validated token lifetime from a number of minutes.
    ///
    /// # Errors
    /// Same as [`TokenTtl::new`], plus `TooLong` when the minutes do not fit
    /// in a duration at all.
    pub fn from_minutes(minutes: i64) -> Result<Self, TokenTtlError> {
        let ttl = Duration::try_minutes(minutes).ok_or_else(Self::too_long)?;
        Self::new(ttl)
    }

    fn too_long() -> TokenTtlError {
        TokenTtlError::TooLong {
            max_days: Self::MAX_DAYS,
        }
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}
