#![allow(dead_code)]

use std::sync::Arc;

use auth::Claims;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use sqlx::SqlitePool;
use sso_service::credentials::models::TokenTtl;
use sso_service::credentials::ports::CredentialServicePort;
use sso_service::credentials::service::CredentialService;
use sso_service::inbound::http::router::create_router;
use sso_service::repositories::SqliteStorage;
use tracing::Span;

pub const TEST_APP_ID: i32 = 7;
pub const TEST_APP_SECRET: &str = "test-app-secret";
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = test_pool().await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(credential_service(&pool));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            pool,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }
}

/// In-memory database with the schema applied and one registered app
pub async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database
    let pool = SqliteStorage::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");

    SqliteStorage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("INSERT INTO apps (id, name, secret) VALUES (?, ?, ?)")
        .bind(TEST_APP_ID)
        .bind("test-app")
        .bind(TEST_APP_SECRET)
        .execute(&pool)
        .await
        .expect("Failed to register test app");

    pool
}

pub fn credential_service(pool: &SqlitePool) -> Arc<dyn CredentialServicePort> {
    let storage = Arc::new(SqliteStorage::new(pool.clone()));

    Arc::new(CredentialService::new(
        Arc::clone(&storage),
        Arc::clone(&storage),
        storage,
        TokenTtl::new(Duration::minutes(TOKEN_TTL_MINUTES)).unwrap(),
        Span::none(),
    ))
}

pub async fn user_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn grant_admin(pool: &SqlitePool, user_id: i64) {
    sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to grant admin");
}

/// Decode a token minted for the test app
pub fn decode_token(token: &str) -> Claims {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_APP_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("Failed to decode token")
    .claims
}
