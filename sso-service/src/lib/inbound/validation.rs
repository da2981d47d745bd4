use thiserror::Error;

use crate::credentials::models::AppId;
use crate::credentials::models::UserId;

/// Shortest email accepted at the boundary.
pub const MIN_EMAIL_LENGTH: usize = 5;

/// Request shape violations, rejected before the credential service runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email is invalid")]
    EmailTooShort,

    #[error("password is required")]
    PasswordRequired,

    #[error("app_id is required")]
    AppIdRequired,

    #[error("user_id is required")]
    UserIdRequired,
}

/// Validated registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    /// # Errors
    /// * `EmailTooShort` - Email shorter than five characters
    /// * `PasswordRequired` - Password is empty
    pub fn new(email: String, password: String) -> Result<Self, ValidationError> {
        let email = with_valid_email(email)?;
        let password = with_password(password)?;
        Ok(Self { email, password })
    }
}

/// Validated login request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub app_id: AppId,
}

impl LoginCommand {
    /// # Errors
    /// * `EmailTooShort` - Email shorter than five characters
    /// * `PasswordRequired` - Password is empty
    /// * `AppIdRequired` - App id is zero
    pub fn new(email: String, password: String, app_id: i32) -> Result<Self, ValidationError> {
        let email = with_valid_email(email)?;
        let password = with_password(password)?;
        if app_id == 0 {
            return Err(ValidationError::AppIdRequired);
        }
        Ok(Self {
            email,
            password,
            app_id: AppId(app_id),
        })
    }
}

/// Validated admin check request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsAdminQuery {
    pub user_id: UserId,
}

impl IsAdminQuery {
    /// # Errors
    /// * `UserIdRequired` - User id is zero
    pub fn new(user_id: i64) -> Result<Self, ValidationError> {
        if user_id == 0 {
            return Err(ValidationError::UserIdRequired);
        }
        Ok(Self {
            user_id: UserId(user_id),
        })
    }
}

fn with_valid_email(email: String) -> Result<String, ValidationError> {
    if email.chars().count() < MIN_EMAIL_LENGTH {
        Err(ValidationError::EmailTooShort)
    } else {
        Ok(email)
    }
}

fn with_password(password: String) -> Result<String, ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else {
        Ok(password)
    }
}
