use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::credentials::errors::StorageError;
use crate::credentials::models::App;
use crate::credentials::models::AppId;
use crate::credentials::models::User;
use crate::credentials::models::UserId;
use crate::credentials::ports::AppProvider;
use crate::credentials::ports::UserProvider;
use crate::credentials::ports::UserSaver;

/// SQLite-backed store for users and registered applications.
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a connection pool, creating the database file if it is missing.
    ///
    /// # Arguments
    /// * `url` - SQLite URL, e.g. `sqlite://sso.db` or `sqlite::memory:`
    /// * `max_connections` - Pool size
    pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
    }

    /// Apply the embedded schema migrations.
    pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(pool).await
    }
}

#[async_trait]
impl UserSaver for SqliteStorage {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<UserId, StorageError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?, ?)")
            .bind(email)
            .bind(pass_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return StorageError::UserExists(email.to_string());
                    }
                }
                StorageError::Database(e.to_string())
            })?;

        Ok(UserId(result.last_insert_rowid()))
    }
}

#[async_trait]
impl UserProvider for SqliteStorage {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let row = sqlx::query("SELECT id, email, pass_hash FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?
            .ok_or(StorageError::UserNotFound)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(database_error)?),
            email: row.try_get("email").map_err(database_error)?,
            pass_hash: row.try_get("pass_hash").map_err(database_error)?,
        })
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT is_admin FROM users WHERE id = ?")
            .bind(user_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?
            .ok_or(StorageError::AppNotFound)?;

        row.try_get("is_admin").map_err(database_error)
    }
}

#[async_trait]
impl AppProvider for SqliteStorage {
    async fn app(&self, app_id: AppId) -> Result<App, StorageError> {
        let row = sqlx::query("SELECT id, name, secret FROM apps WHERE id = ?")
            .bind(app_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?
            .ok_or(StorageError::AppNotFound)?;

        Ok(App {
            id: AppId(row.try_get("id").map_err(database_error)?),
            name: row.try_get("name").map_err(database_error)?,
            secret: row.try_get("secret").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}
