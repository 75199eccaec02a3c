//! Recipe, ingredient, and tag-link tests, including the row-level
//! visibility and ownership rules.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_own_recipe() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("cook");

    let recipe_id = app
        .create_recipe(user_id, &token, "Weeknight Carbonara", false)
        .await;

    let response = app
        .request("GET", &format!("/api/recipes/{recipe_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("title").and_then(|v| v.as_str()),
        Some("Weeknight Carbonara")
    );
    assert_eq!(
        response.data().get("is_public").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[tokio::test]
async fn test_private_recipe_invisible_to_others() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("private_owner");
    let (_, other_token) = app.issue_identity("snoop");

    let recipe_id = app
        .create_recipe(owner_id, &owner_token, "Secret Sauce", false)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}"),
            None,
            Some(&other_token),
        )
        .await;

    // Denied reads never reveal that the row exists.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_recipe_readable_by_anyone() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("sharer");
    let (_, reader_token) = app.issue_identity("reader");

    let recipe_id = app
        .create_recipe(owner_id, &owner_token, "Shared Paella", true)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}"),
            None,
            Some(&reader_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("title").and_then(|v| v.as_str()),
        Some("Shared Paella")
    );
}

#[tokio::test]
async fn test_public_recipe_not_writable_by_others() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("author");
    let (_, other_token) = app.issue_identity("editor_wannabe");

    let recipe_id = app
        .create_recipe(owner_id, &owner_token, "Public Ramen", true)
        .await;

    // Visible but unowned: the denial is Forbidden, not NotFound.
    let update = app
        .request(
            "PUT",
            &format!("/api/recipes/{recipe_id}"),
            Some(serde_json::json!({ "title": "Hijacked" })),
            Some(&other_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/recipes/{recipe_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    // The owner still sees the original title.
    let check = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(
        check.data().get("title").and_then(|v| v.as_str()),
        Some("Public Ramen")
    );
}

#[tokio::test]
async fn test_create_with_foreign_owner_is_forbidden() {
    let app = TestApp::new().await;
    let (victim_id, victim_token) = app.issue_identity("victim");
    let (_, attacker_token) = app.issue_identity("attacker");

    // Materialize the victim profile so the owner column would be valid.
    app.request("GET", "/api/profiles/me", None, Some(&victim_token))
        .await;

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({
                "user_id": victim_id,
                "title": "Planted Recipe",
            })),
            Some(&attacker_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_rejects_empty_title() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("untitled");

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(serde_json::json!({ "user_id": user_id, "title": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_updates_own_recipe() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("revisor");

    let recipe_id = app.create_recipe(user_id, &token, "Draft Curry", false).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/recipes/{recipe_id}"),
            Some(serde_json::json!({
                "title": "Final Curry",
                "servings": 4,
                "is_public": true,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.data().get("title").and_then(|v| v.as_str()),
        Some("Final Curry")
    );
    assert_eq!(
        response.data().get("servings").and_then(|v| v.as_i64()),
        Some(4)
    );
    assert_eq!(
        response.data().get("is_public").and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[tokio::test]
async fn test_list_scopes_by_visibility() {
    let app = TestApp::new().await;
    let (alice_id, alice_token) = app.issue_identity("alice_r");
    let (bob_id, bob_token) = app.issue_identity("bob_r");

    // Titles carry a unique marker so the assertions are immune to rows
    // left by other tests sharing the database.
    let marker = uuid::Uuid::new_v4().simple().to_string();
    let alice_private = format!("Alice Private {marker}");
    let alice_public = format!("Alice Public {marker}");
    let bob_private = format!("Bob Private {marker}");

    app.create_recipe(alice_id, &alice_token, &alice_private, false)
        .await;
    app.create_recipe(alice_id, &alice_token, &alice_public, true)
        .await;
    app.create_recipe(bob_id, &bob_token, &bob_private, false)
        .await;

    // Default scope: own rows plus public rows, newest first.
    let all = app
        .request("GET", "/api/recipes?per_page=100", None, Some(&bob_token))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    let titles: Vec<&str> = all
        .data()
        .get("items")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .filter_map(|r| r.get("title").and_then(|t| t.as_str()))
        .collect();
    assert!(titles.contains(&alice_public.as_str()));
    assert!(titles.contains(&bob_private.as_str()));
    assert!(!titles.contains(&alice_private.as_str()));

    // Own rows only.
    let mine = app
        .request("GET", "/api/recipes?visibility=mine", None, Some(&bob_token))
        .await;
    assert_eq!(
        mine.data().get("total_items").and_then(|v| v.as_u64()),
        Some(1)
    );

    // Title search: only Alice's public row matches the marker for Bob.
    let search = app
        .request(
            "GET",
            &format!("/api/recipes?q=Public%20{marker}"),
            None,
            Some(&bob_token),
        )
        .await;
    assert_eq!(
        search.data().get("total_items").and_then(|v| v.as_u64()),
        Some(1)
    );
    assert_eq!(
        search
            .data()
            .get("items")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|r| r.get("title"))
            .and_then(|t| t.as_str()),
        Some(alice_public.as_str())
    );
}

#[tokio::test]
async fn test_ingredient_lifecycle() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("prepper");

    let recipe_id = app.create_recipe(user_id, &token, "Stir Fry", false).await;

    let created = app
        .request(
            "POST",
            &format!("/api/recipes/{recipe_id}/ingredients"),
            Some(serde_json::json!({
                "name": "soy sauce",
                "amount": 2.0,
                "unit": "tbsp",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    let ingredient_id = created.id();

    let listed = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}/ingredients"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.data().as_array().map(|a| a.len()), Some(1));

    let updated = app
        .request(
            "PUT",
            &format!("/api/ingredients/{ingredient_id}"),
            Some(serde_json::json!({ "amount": 3.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.data().get("amount").and_then(|v| v.as_f64()),
        Some(3.0)
    );

    let removed = app
        .request(
            "DELETE",
            &format!("/api/ingredients/{ingredient_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);

    let after = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}/ingredients"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(after.data().as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_ingredient_insert_into_unowned_public_recipe_is_forbidden() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("pub_owner");
    let (_, other_token) = app.issue_identity("contributor");

    let recipe_id = app
        .create_recipe(owner_id, &owner_token, "Open Recipe", true)
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{recipe_id}/ingredients"),
            Some(serde_json::json!({ "name": "anchovies" })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_tag_attach_and_detach() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("tagger");

    let recipe_id = app.create_recipe(user_id, &token, "Pad Thai", false).await;

    // Pick a tag from the seeded catalog.
    let tags = app
        .request("GET", "/api/tags?tag_type=cuisine", None, Some(&token))
        .await;
    let tag_id = tags
        .data()
        .get("items")
        .and_then(|v| v.as_array())
        .and_then(|a| a.first())
        .and_then(|t| t.get("id"))
        .and_then(|v| v.as_str())
        .expect("No seeded cuisine tags")
        .to_string();

    let attached = app
        .request(
            "POST",
            &format!("/api/recipes/{recipe_id}/tags"),
            Some(serde_json::json!({ "tag_id": tag_id })),
            Some(&token),
        )
        .await;
    assert_eq!(attached.status, StatusCode::OK, "{:?}", attached.body);

    let listed = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}/tags"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.data().as_array().map(|a| a.len()), Some(1));

    let detached = app
        .request(
            "DELETE",
            &format!("/api/recipes/{recipe_id}/tags/{tag_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(detached.status, StatusCode::OK);

    let after = app
        .request(
            "GET",
            &format!("/api/recipes/{recipe_id}/tags"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(after.data().as_array().map(|a| a.len()), Some(0));
}
