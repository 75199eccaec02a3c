//! Profile self-service tests.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_profile_materializes_on_first_request() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("first_timer");

    let response = app
        .request("GET", "/api/profiles/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("id").and_then(|v| v.as_str()),
        Some(user_id.to_string().as_str())
    );
    let username = response
        .data()
        .get("username")
        .and_then(|v| v.as_str())
        .unwrap();
    assert!(username.starts_with("first_timer"), "got {username}");
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("renamer");

    let new_name = format!("renamed-{}", uuid::Uuid::new_v4().simple());
    let response = app
        .request(
            "PUT",
            "/api/profiles/me",
            Some(serde_json::json!({
                "username": new_name,
                "full_name": "Re Named",
                "dietary_preferences": ["vegetarian"],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.data().get("username").and_then(|v| v.as_str()),
        Some(new_name.as_str())
    );
    assert_eq!(
        response.data().get("full_name").and_then(|v| v.as_str()),
        Some("Re Named")
    );
}

#[tokio::test]
async fn test_update_rejects_empty_username() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("strict");

    let response = app
        .request(
            "PUT",
            "/api/profiles/me",
            Some(serde_json::json!({ "username": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_two_identities_get_separate_profiles() {
    let app = TestApp::new().await;
    let (alice_id, alice_token) = app.issue_identity("alice_p");
    let (bob_id, bob_token) = app.issue_identity("bob_p");

    let alice = app
        .request("GET", "/api/profiles/me", None, Some(&alice_token))
        .await;
    let bob = app
        .request("GET", "/api/profiles/me", None, Some(&bob_token))
        .await;

    assert_eq!(
        alice.data().get("id").and_then(|v| v.as_str()),
        Some(alice_id.to_string().as_str())
    );
    assert_eq!(
        bob.data().get("id").and_then(|v| v.as_str()),
        Some(bob_id.to_string().as_str())
    );
    assert_ne!(alice_id, bob_id);
}
