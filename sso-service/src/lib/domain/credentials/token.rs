use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use chrono::DateTime;
use chrono::Utc;

use crate::credentials::models::App;
use crate::credentials::models::TokenTtl;
use crate::credentials::models::User;

/// Mint a token for `user` signed with the secret of `app`.
///
/// The token expires at `now + ttl`.
///
/// # Errors
/// * `MissingSecret` - App has an empty secret
/// * `ExpirationOutOfRange` - Expiration cannot be represented
/// * `EncodingFailed` - Signing failed
pub fn mint(
    authenticator: &Authenticator,
    user: &User,
    app: &App,
    ttl: TokenTtl,
    now: DateTime<Utc>,
) -> Result<String, JwtError> {
    let claims = Claims::for_user(user.id.0, &user.email, app.id.0, ttl.as_duration(), now)?;

    authenticator.issue_token(&claims, app.secret.as_bytes())
}
