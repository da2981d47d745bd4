mod common;

use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn register(app: &TestApp, email: &str, password: &str) -> reqwest::Response {
    app.post("/api/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn login(app: &TestApp, email: &str, password: &str, app_id: i32) -> reqwest::Response {
    app.post("/api/auth/login")
        .json(&json!({ "email": email, "password": password, "app_id": app_id }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice@x.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert!(body["data"]["user_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice@x.com", "secret1").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = register(&app, "alice@x.com", "another1").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "user already exists");

    assert_eq!(common::user_count(&app.pool).await, 1);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::spawn().await;

    let response = register(&app, "a@b", "secret1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "email is invalid");

    let response = register(&app, "alice@x.com", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "password is required");

    assert_eq!(common::user_count(&app.pool).await, 0);
}

#[tokio::test]
async fn test_login_flow() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice@x.com", "secret1").await;
    let body: Value = response.json().await.expect("Failed to parse response");
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let issued_at = Utc::now().timestamp();
    let response = login(&app, "alice@x.com", "secret1", common::TEST_APP_ID).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();

    let claims = common::decode_token(token);
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, "alice@x.com");
    assert_eq!(claims.app_id, common::TEST_APP_ID);

    let ttl = common::TOKEN_TTL_MINUTES * 60;
    assert!(claims.exp >= issued_at + ttl);
    assert!(claims.exp <= Utc::now().timestamp() + ttl);
}

#[tokio::test]
async fn test_login_does_not_reveal_unknown_accounts() {
    let app = TestApp::spawn().await;

    register(&app, "alice@x.com", "secret1").await;

    let wrong_password = login(&app, "alice@x.com", "wrongpw", common::TEST_APP_ID).await;
    let unknown_user = login(&app, "nobody@x.com", "whatever", common::TEST_APP_ID).await;

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status(), StatusCode::BAD_REQUEST);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::spawn().await;

    let response = login(&app, "alice@x.com", "secret1", 0).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "app_id is required");
}

#[tokio::test]
async fn test_login_unknown_app_is_internal() {
    let app = TestApp::spawn().await;

    register(&app, "alice@x.com", "secret1").await;

    let response = login(&app, "alice@x.com", "secret1", 999).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "internal error");
}

#[tokio::test]
async fn test_is_admin() {
    let app = TestApp::spawn().await;

    let response = register(&app, "alice@x.com", "secret1").await;
    let body: Value = response.json().await.expect("Failed to parse response");
    let user_id = body["data"]["user_id"].as_i64().unwrap();

    let response = app
        .get(&format!("/api/users/{}/admin", user_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["is_admin"], false);

    common::grant_admin(&app.pool, user_id).await;

    let response = app
        .get(&format!("/api/users/{}/admin", user_id))
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["is_admin"], true);
}

#[tokio::test]
async fn test_is_admin_unknown_and_zero_ids() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/12345/admin")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .get("/api/users/0/admin")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "user_id is required");
}
