use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;
use tracing::Instrument;
use tracing::Span;

use crate::credentials::errors::CredentialError;
use crate::credentials::errors::StorageError;
use crate::credentials::models::AppId;
use crate::credentials::models::TokenTtl;
use crate::credentials::models::UserId;
use crate::credentials::ports::AppProvider;
use crate::credentials::ports::CredentialServicePort;
use crate::credentials::ports::UserProvider;
use crate::credentials::ports::UserSaver;
use crate::credentials::token;

/// Domain service implementation for registration, login and privilege lookup.
pub struct CredentialService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    user_saver: Arc<US>,
    user_provider: Arc<UP>,
    app_provider: Arc<AP>,
    authenticator: Authenticator,
    token_ttl: TokenTtl,
    span: Span,
}

impl<US, UP, AP> CredentialService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_saver` - Persists new users
    /// * `user_provider` - Looks up users and their admin flag
    /// * `app_provider` - Looks up registered applications
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `span` - Parent span for every operation this service logs
    pub fn new(
        user_saver: Arc<US>,
        user_provider: Arc<UP>,
        app_provider: Arc<AP>,
        token_ttl: TokenTtl,
        span: Span,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            authenticator: Authenticator::new(),
            token_ttl,
            span,
        }
    }
}

impl<US, UP, AP> CredentialService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    /// Run Argon2 work on the blocking thread pool.
    async fn blocking<T, F>(&self, op: &'static str, work: F) -> Result<T, CredentialError>
    where
        F: FnOnce(Authenticator) -> T + Send + 'static,
        T: Send + 'static,
    {
        let authenticator = self.authenticator.clone();

        tokio::task::spawn_blocking(move || work(authenticator))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password task failed");
                CredentialError::internal(op, e)
            })
    }

    async fn register(&self, email: &str, password: &str) -> Result<UserId, CredentialError> {
        const OP: &str = "Auth.RegisterNewUser";

        let password = password.to_owned();
        let pass_hash = self
            .blocking(OP, move |authenticator| authenticator.hash_password(&password))
            .await?
            .map_err(|e| {
                tracing::error!(error = %e, "failed to generate password hash");
                CredentialError::internal(OP, e)
            })?;

        match self.user_saver.save_user(email, pass_hash.as_bytes()).await {
            Ok(user_id) => {
                tracing::info!(user_id = %user_id, "user registered");
                Ok(user_id)
            }
            Err(StorageError::UserExists(email)) => {
                tracing::warn!("user already exists");
                Err(CredentialError::UserAlreadyExists(email))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save user");
                Err(CredentialError::internal(OP, e))
            }
        }
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, CredentialError> {
        const OP: &str = "Auth.Login";

        let user = match self.user_provider.user(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                let password = password.to_owned();
                self.blocking(OP, move |authenticator| {
                    authenticator.reject_unknown(&password)
                })
                .await?;
                tracing::warn!("user not found");
                return Err(CredentialError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to get user");
                return Err(CredentialError::internal(OP, e));
            }
        };

        let password = password.to_owned();
        let pass_hash = user.pass_hash.clone();
        let verified = self
            .blocking(OP, move |authenticator| {
                authenticator.verify_credentials(&password, &pass_hash)
            })
            .await?;

        match verified {
            Ok(()) => {}
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!("invalid credentials");
                return Err(CredentialError::InvalidCredentials);
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(
                    user_id = %user.id,
                    error = %e,
                    "stored password hash is unusable"
                );
                return Err(CredentialError::internal(OP, e));
            }
        }

        let app = self.app_provider.app(app_id).await.map_err(|e| {
            tracing::error!(error = %e, "failed to get app");
            CredentialError::internal(OP, e)
        })?;

        let token = token::mint(&self.authenticator, &user, &app, self.token_ttl, Utc::now())
            .map_err(|e| {
                tracing::error!(error = %e, "failed to generate token");
                CredentialError::internal(OP, e)
            })?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(token)
    }

    async fn admin_flag(&self, user_id: UserId) -> Result<bool, CredentialError> {
        const OP: &str = "Auth.IsAdmin";

        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => {
                tracing::info!(is_admin, "checked if user is admin");
                Ok(is_admin)
            }
            Err(StorageError::AppNotFound) => {
                tracing::warn!("app not found");
                Err(CredentialError::InvalidAppId)
            }
            Err(StorageError::UserNotFound) => {
                tracing::warn!("user not found");
                Err(CredentialError::UserNotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to check admin flag");
                Err(CredentialError::internal(OP, e))
            }
        }
    }
}

#[async_trait]
impl<US, UP, AP> CredentialServicePort for CredentialService<US, UP, AP>
where
    US: UserSaver,
    UP: UserProvider,
    AP: AppProvider,
{
    async fn register_new_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserId, CredentialError> {
        let span = tracing::info_span!(
            parent: &self.span,
            "register_new_user",
            op = "Auth.RegisterNewUser",
            email = %email
        );

        self.register(email, password).instrument(span).await
    }

    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, CredentialError> {
        let span = tracing::info_span!(
            parent: &self.span,
            "login",
            op = "Auth.Login",
            email = %email,
            app_id = %app_id
        );

        self.authenticate(email, password, app_id)
            .instrument(span)
            .await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, CredentialError> {
        let span = tracing::info_span!(
            parent: &self.span,
            "is_admin",
            op = "Auth.IsAdmin",
            user_id = %user_id
        );

        self.admin_flag(user_id).instrument(span).await
    }
}
