use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::mock_app::{self, read_json, MockApp, PASSWORD, SERIAL, USERNAME};

#[tokio::test]
async fn test_login() {
    let app = MockApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "icp_serial": SERIAL, "username": USERNAME, "password": PASSWORD }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["username"], USERNAME);

    let session_id = body["session_id"].as_str().unwrap();
    assert!(app.controller.is_valid(session_id).await);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = MockApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "icp_serial": SERIAL, "username": USERNAME, "password": "wrong" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid username or password");
    assert!(body.get("session_id").is_none());
}

#[tokio::test]
async fn test_login_with_invalid_serial() {
    let app = MockApp::new().await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "icp_serial": "../etc", "username": USERNAME, "password": PASSWORD }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["success"], false);
}

#[tokio::test]
async fn test_login_with_unreachable_controller() {
    let router = MockApp::unreachable();

    let response = mock_app::post(
        &router,
        "/api/auth/login",
        json!({ "icp_serial": SERIAL, "username": USERNAME, "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Controller unreachable");
}

#[tokio::test]
async fn test_logout() {
    let app = MockApp::new().await;
    let session_id = app.login().await;

    let response = app
        .post_with_session("/api/auth/logout", &session_id, json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!app.controller.is_valid(&session_id).await);

    let response = app
        .post_with_session("/api/areas", &session_id, json!({}))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session() {
    let app = MockApp::new().await;

    let response = app.post("/api/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
