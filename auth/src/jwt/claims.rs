use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::JwtError;

/// Claims carried by an SSO access token.
///
/// A token is bound to one user and to the application it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub uid: i64,

    /// User email
    pub email: String,

    /// Identifier of the application the token was issued for
    pub app_id: i32,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with an expiration of `now + ttl`.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Requesting application
    /// * `ttl` - Token lifetime
    /// * `now` - Issue time
    ///
    /// # Errors
    /// * `ExpirationOutOfRange` - `now + ttl` is not a representable time
    pub fn for_user(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, JwtError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpirationOutOfRange)?;

        Ok(Self {
            uid,
            email: email.into(),
            app_id,
            exp: expires_at.timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_user() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_user(42, "alice@x.com", 7, Duration::hours(1), now).unwrap();

        assert_eq!(claims.uid, 42);
        assert_eq!(claims.email, "alice@x.com");
        assert_eq!(claims.app_id, 7);
        assert_eq!(claims.exp, now.timestamp() + 60 * 60);
    }

    #[test]
    fn test_for_user_expiration_overflow() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ttl = Duration::minutes(200_000_000_000);

        let result = Claims::for_user(42, "alice@x.com", 7, ttl, now);
        assert!(matches!(result, Err(JwtError::ExpirationOutOfRange)));
    }

    #[test]
    fn test_serialized_keys() {
        let claims = Claims {
            uid: 1,
            email: "bob@x.com".to_string(),
            app_id: 3,
            exp: 1_700_000_000,
        };

        let mut keys: Vec<String> = match serde_json::to_value(&claims).unwrap() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("claims serialized to {other}"),
        };
        keys.sort();

        assert_eq!(keys, vec!["app_id", "email", "exp", "uid"]);
    }
}
