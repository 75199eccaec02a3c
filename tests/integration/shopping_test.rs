//! Shopping list and list item tests. Lists are owner-only like meal
//! plans: denials surface as NotFound.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_lifecycle() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("shopper");

    let list_id = app
        .create_shopping_list(user_id, &token, "Saturday Groceries")
        .await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/shopping-lists/{list_id}"),
            Some(serde_json::json!({ "is_completed": true, "total_cost": 42.50 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(
        updated.data().get("is_completed").and_then(|v| v.as_bool()),
        Some(true)
    );

    let listed = app
        .request("GET", "/api/shopping-lists", None, Some(&token))
        .await;
    assert_eq!(
        listed.data().get("total_items").and_then(|v| v.as_u64()),
        Some(1)
    );

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/shopping-lists/{list_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_lists_are_invisible_to_other_identities() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("list_owner");
    let (_, other_token) = app.issue_identity("list_snoop");

    let list_id = app
        .create_shopping_list(owner_id, &owner_token, "Private List")
        .await;

    let read = app
        .request(
            "GET",
            &format!("/api/shopping-lists/{list_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/shopping-lists/{list_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_list_for_foreign_owner_is_forbidden() {
    let app = TestApp::new().await;
    let (victim_id, victim_token) = app.issue_identity("list_victim");
    let (_, attacker_token) = app.issue_identity("list_attacker");

    app.request("GET", "/api/profiles/me", None, Some(&victim_token))
        .await;

    let response = app
        .request(
            "POST",
            "/api/shopping-lists",
            Some(serde_json::json!({
                "user_id": victim_id,
                "title": "Planted List",
            })),
            Some(&attacker_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_item_lifecycle() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("list_filler");

    let list_id = app
        .create_shopping_list(user_id, &token, "Weekly Run")
        .await;

    let created = app
        .request(
            "POST",
            &format!("/api/shopping-lists/{list_id}/items"),
            Some(serde_json::json!({
                "ingredient_name": "olive oil",
                "amount": 1.0,
                "unit": "bottle",
                "category": "pantry",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    let item_id = created.id();

    let checked = app
        .request(
            "PUT",
            &format!("/api/shopping-list-items/{item_id}"),
            Some(serde_json::json!({ "is_checked": true, "actual_cost": 8.99 })),
            Some(&token),
        )
        .await;
    assert_eq!(checked.status, StatusCode::OK, "{:?}", checked.body);
    assert_eq!(
        checked.data().get("is_checked").and_then(|v| v.as_bool()),
        Some(true)
    );

    let listed = app
        .request(
            "GET",
            &format!("/api/shopping-lists/{list_id}/items"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.data().as_array().map(|a| a.len()), Some(1));

    let removed = app
        .request(
            "DELETE",
            &format!("/api/shopping-list-items/{item_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_item_update_through_foreign_list_is_not_found() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("checker");
    let (_, other_token) = app.issue_identity("unchecker");

    let list_id = app
        .create_shopping_list(owner_id, &owner_token, "Guarded List")
        .await;
    let created = app
        .request(
            "POST",
            &format!("/api/shopping-lists/{list_id}/items"),
            Some(serde_json::json!({ "ingredient_name": "butter" })),
            Some(&owner_token),
        )
        .await;
    let item_id = created.id();

    let response = app
        .request(
            "PUT",
            &format!("/api/shopping-list-items/{item_id}"),
            Some(serde_json::json!({ "is_checked": true })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_updates_to_disjoint_columns_both_land() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("concurrent");

    let list_id = app
        .create_shopping_list(user_id, &token, "Racy List")
        .await;
    let created = app
        .request(
            "POST",
            &format!("/api/shopping-lists/{list_id}/items"),
            Some(serde_json::json!({ "ingredient_name": "flour" })),
            Some(&token),
        )
        .await;
    let item_id = created.id();

    // Partial updates touch only the columns they carry, so two callers
    // hitting disjoint columns must both land.
    let path = format!("/api/shopping-list-items/{item_id}");
    let (a, b) = tokio::join!(
        app.request(
            "PUT",
            &path,
            Some(serde_json::json!({ "is_checked": true })),
            Some(&token),
        ),
        app.request(
            "PUT",
            &path,
            Some(serde_json::json!({ "actual_cost": 2.49 })),
            Some(&token),
        ),
    );
    assert_eq!(a.status, StatusCode::OK, "{:?}", a.body);
    assert_eq!(b.status, StatusCode::OK, "{:?}", b.body);

    let listed = app
        .request(
            "GET",
            &format!("/api/shopping-lists/{list_id}/items"),
            None,
            Some(&token),
        )
        .await;
    let item = &listed.data().as_array().unwrap()[0];
    assert_eq!(item.get("is_checked").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(item.get("actual_cost").and_then(|v| v.as_f64()), Some(2.49));
}
