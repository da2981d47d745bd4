mod common;

use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::proto::auth_server::Auth;
use sso_service::proto::IsAdminRequest;
use sso_service::proto::LoginRequest;
use sso_service::proto::RegisterRequest;
use tonic::Code;
use tonic::Request;

async fn grpc_service() -> (AuthGrpcService, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let service = AuthGrpcService::new(common::credential_service(&pool));
    (service, pool)
}

fn register_request(email: &str, password: &str) -> Request<RegisterRequest> {
    Request::new(RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn login_request(email: &str, password: &str, app_id: i32) -> Request<LoginRequest> {
    Request::new(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        app_id,
    })
}

#[tokio::test]
async fn test_register_and_login() {
    let (grpc, _pool) = grpc_service().await;

    let user_id = grpc
        .register(register_request("alice@x.com", "secret1"))
        .await
        .expect("Register failed")
        .into_inner()
        .user_id;

    let token = grpc
        .login(login_request("alice@x.com", "secret1", common::TEST_APP_ID))
        .await
        .expect("Login failed")
        .into_inner()
        .token;

    let claims = common::decode_token(&token);
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.app_id, common::TEST_APP_ID);

    let status = grpc
        .login(login_request("alice@x.com", "wrongpw", common::TEST_APP_ID))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = grpc
        .login(login_request("nobody@x.com", "whatever", common::TEST_APP_ID))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_register_twice_keeps_one_record() {
    let (grpc, pool) = grpc_service().await;

    grpc.register(register_request("alice@x.com", "secret1"))
        .await
        .expect("Register failed");

    let status = grpc
        .register(register_request("alice@x.com", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
    assert_eq!(status.message(), "user already exists");

    assert_eq!(common::user_count(&pool).await, 1);
}

#[tokio::test]
async fn test_is_admin() {
    let (grpc, pool) = grpc_service().await;

    let user_id = grpc
        .register(register_request("root@x.com", "secret1"))
        .await
        .expect("Register failed")
        .into_inner()
        .user_id;
    common::grant_admin(&pool, user_id).await;

    let response = grpc
        .is_admin(Request::new(IsAdminRequest { user_id }))
        .await
        .expect("IsAdmin failed");
    assert!(response.into_inner().is_admin);

    let status = grpc
        .is_admin(Request::new(IsAdminRequest { user_id: user_id + 100 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_login_with_unregistered_app() {
    let (grpc, _pool) = grpc_service().await;

    grpc.register(register_request("alice@x.com", "secret1"))
        .await
        .expect("Register failed");

    let status = grpc
        .login(login_request("alice@x.com", "secret1", 404))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal error");
}
