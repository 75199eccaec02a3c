//! Tag catalog tests. The catalog is readable by any authenticated
//! identity and writable by nobody; write routes answer with an explicit
//! policy denial.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_seeded_catalog_is_listable() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("tag_reader");

    let response = app.request("GET", "/api/tags", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let total = response
        .data()
        .get("total_items")
        .and_then(|v| v.as_u64())
        .unwrap();
    assert!(total >= 29, "Expected the seeded catalog, got {total} tags");
}

#[tokio::test]
async fn test_list_filters_by_tag_type() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("tag_filterer");

    let response = app
        .request("GET", "/api/tags?tag_type=cuisine", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.data().get("items").and_then(|v| v.as_array()).unwrap();
    assert!(!items.is_empty());
    for tag in items {
        assert_eq!(tag.get("tag_type").and_then(|v| v.as_str()), Some("cuisine"));
    }
}

#[tokio::test]
async fn test_get_single_tag() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("tag_getter");

    let listed = app
        .request("GET", "/api/tags?tag_type=dietary", None, Some(&token))
        .await;
    let tag_id = listed
        .data()
        .get("items")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first())
        .and_then(|t| t.get("id"))
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string();

    let response = app
        .request("GET", &format!("/api/tags/{tag_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("tag_type").and_then(|v| v.as_str()),
        Some("dietary")
    );
}

#[tokio::test]
async fn test_catalog_rejects_all_writes() {
    let app = TestApp::new().await;
    let (_, token) = app.issue_identity("tag_writer");

    let listed = app.request("GET", "/api/tags", None, Some(&token)).await;
    let tag_id = listed
        .data()
        .get("items")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first())
        .and_then(|t| t.get("id"))
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string();

    let create = app
        .request(
            "POST",
            "/api/tags",
            Some(serde_json::json!({ "name": "fusion", "tag_type": "cuisine" })),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let update = app
        .request(
            "PUT",
            &format!("/api/tags/{tag_id}"),
            Some(serde_json::json!({ "name": "renamed" })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request("DELETE", &format!("/api/tags/{tag_id}"), None, Some(&token))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_catalog_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/tags", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
