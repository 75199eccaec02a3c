//! Health endpoint and authentication gate tests.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_connected_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("database").and_then(|v| v.as_str()),
        Some("connected")
    );
    assert_eq!(
        response.data().get("status").and_then(|v| v.as_str()),
        Some("ok")
    );
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/recipes", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/recipes", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_is_unauthorized() {
    let app = TestApp::new().await;

    let claims = serde_json::json!({
        "sub": uuid::Uuid::new_v4(),
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = app
        .request("GET", "/api/recipes", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
