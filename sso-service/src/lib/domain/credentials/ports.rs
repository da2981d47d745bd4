use async_trait::async_trait;

use crate::credentials::errors::CredentialError;
use crate::credentials::errors::StorageError;
use crate::credentials::models::App;
use crate::credentials::models::AppId;
use crate::credentials::models::User;
use crate::credentials::models::UserId;

/// Port for credential operations exposed to the transports.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `email` - Unique email of the new user
    /// * `password` - Plaintext password (hashed before storage)
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register_new_user(&self, email: &str, password: &str)
        -> Result<UserId, CredentialError>;

    /// Check credentials and mint a token for the given application.
    ///
    /// # Arguments
    /// * `email` - User email
    /// * `password` - Plaintext password
    /// * `app_id` - Application the token is requested for
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Internal` - Storage failed, app is unknown, or signing failed
    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, CredentialError>;

    /// Report whether a user has the administrative flag.
    ///
    /// # Errors
    /// * `InvalidAppId` - Store has no record in scope for this identifier
    /// * `UserNotFound` - Store reports the user missing
    /// * `Internal` - Storage failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, CredentialError>;
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Insert a user, enforcing email uniqueness.
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<UserId, StorageError>;
}

/// Reads users.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Find a user by email.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Database operation failed
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Read the administrative flag of a user.
    ///
    /// # Errors
    /// * `AppNotFound` - No record for this identifier
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Reads registered applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Find an application by identifier.
    ///
    /// # Errors
    /// * `AppNotFound` - No application with this identifier
    /// * `Database` - Database operation failed
    async fn app(&self, app_id: AppId) -> Result<App, StorageError>;
}
