//! Meal plan and plan item tests. Plans are owner-only: they have no
//! public state, so every denial surfaces as NotFound.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_plan_lifecycle() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("planner");

    let plan_id = app.create_meal_plan(user_id, &token, "Week 35").await;

    let fetched = app
        .request("GET", &format!("/api/meal-plans/{plan_id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.data().get("title").and_then(|v| v.as_str()),
        Some("Week 35")
    );

    let updated = app
        .request(
            "PUT",
            &format!("/api/meal-plans/{plan_id}"),
            Some(serde_json::json!({ "title": "Week 35 (revised)" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(
        updated.data().get("title").and_then(|v| v.as_str()),
        Some("Week 35 (revised)")
    );

    let listed = app
        .request("GET", "/api/meal-plans", None, Some(&token))
        .await;
    assert_eq!(
        listed.data().get("total_items").and_then(|v| v.as_u64()),
        Some(1)
    );

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/meal-plans/{plan_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/meal-plans/{plan_id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plans_are_invisible_to_other_identities() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("plan_owner");
    let (_, other_token) = app.issue_identity("plan_snoop");

    let plan_id = app.create_meal_plan(owner_id, &owner_token, "Mine").await;

    let read = app
        .request(
            "GET",
            &format!("/api/meal-plans/{plan_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let update = app
        .request(
            "PUT",
            &format!("/api/meal-plans/{plan_id}"),
            Some(serde_json::json!({ "title": "Theirs" })),
            Some(&other_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let listed = app
        .request("GET", "/api/meal-plans", None, Some(&other_token))
        .await;
    assert_eq!(
        listed.data().get("total_items").and_then(|v| v.as_u64()),
        Some(0)
    );
}

#[tokio::test]
async fn test_create_plan_for_foreign_owner_is_forbidden() {
    let app = TestApp::new().await;
    let (victim_id, victim_token) = app.issue_identity("plan_victim");
    let (_, attacker_token) = app.issue_identity("plan_attacker");

    app.request("GET", "/api/profiles/me", None, Some(&victim_token))
        .await;

    let response = app
        .request(
            "POST",
            "/api/meal-plans",
            Some(serde_json::json!({
                "user_id": victim_id,
                "title": "Planted Plan",
                "start_date": "2026-08-24",
                "end_date": "2026-08-30",
            })),
            Some(&attacker_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_item_lifecycle() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("scheduler");

    let recipe_id = app.create_recipe(user_id, &token, "Oatmeal", false).await;
    let plan_id = app.create_meal_plan(user_id, &token, "Breakfast Week").await;

    let created = app
        .request(
            "POST",
            &format!("/api/meal-plans/{plan_id}/items"),
            Some(serde_json::json!({
                "recipe_id": recipe_id,
                "date": "2026-08-24",
                "meal_type": "breakfast",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    // Servings default to 1 when omitted.
    assert_eq!(
        created.data().get("servings").and_then(|v| v.as_i64()),
        Some(1)
    );
    let item_id = created.id();

    let updated = app
        .request(
            "PUT",
            &format!("/api/meal-plan-items/{item_id}"),
            Some(serde_json::json!({ "servings": 3, "meal_type": "dinner" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(
        updated.data().get("servings").and_then(|v| v.as_i64()),
        Some(3)
    );

    let listed = app
        .request(
            "GET",
            &format!("/api/meal-plans/{plan_id}/items"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.data().as_array().map(|a| a.len()), Some(1));

    let removed = app
        .request(
            "DELETE",
            &format!("/api/meal-plan-items/{item_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_item_rejects_zero_servings() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("zero_servings");

    let plan_id = app.create_meal_plan(user_id, &token, "Strict Plan").await;

    let response = app
        .request(
            "POST",
            &format!("/api/meal-plans/{plan_id}/items"),
            Some(serde_json::json!({
                "recipe_id": uuid::Uuid::new_v4(),
                "date": "2026-08-24",
                "meal_type": "lunch",
                "servings": 0,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_item_insert_into_foreign_plan_is_not_found() {
    let app = TestApp::new().await;
    let (owner_id, owner_token) = app.issue_identity("item_owner");
    let (_, other_token) = app.issue_identity("item_snoop");

    let plan_id = app.create_meal_plan(owner_id, &owner_token, "Guarded").await;

    let response = app
        .request(
            "POST",
            &format!("/api/meal-plans/{plan_id}/items"),
            Some(serde_json::json!({
                "recipe_id": uuid::Uuid::new_v4(),
                "date": "2026-08-25",
                "meal_type": "snack",
            })),
            Some(&other_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_plan_cascades_items() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("cascader");

    let recipe_id = app.create_recipe(user_id, &token, "Chili", false).await;
    let plan_id = app.create_meal_plan(user_id, &token, "Doomed Plan").await;

    for day in ["2026-08-24", "2026-08-25"] {
        let created = app
            .request(
                "POST",
                &format!("/api/meal-plans/{plan_id}/items"),
                Some(serde_json::json!({
                    "recipe_id": recipe_id,
                    "date": day,
                    "meal_type": "dinner",
                })),
                Some(&token),
            )
            .await;
        assert_eq!(created.status, StatusCode::OK);
    }

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/meal-plans/{plan_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM meal_plan_items WHERE meal_plan_id = $1")
            .bind(plan_id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_deleting_recipe_leaves_plan_items_dangling() {
    let app = TestApp::new().await;
    let (user_id, token) = app.issue_identity("dangler");

    let recipe_id = app.create_recipe(user_id, &token, "Ephemeral", false).await;
    let plan_id = app.create_meal_plan(user_id, &token, "Survivor Plan").await;

    let created = app
        .request(
            "POST",
            &format!("/api/meal-plans/{plan_id}/items"),
            Some(serde_json::json!({
                "recipe_id": recipe_id,
                "date": "2026-08-26",
                "meal_type": "lunch",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/recipes/{recipe_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    // The plan item survives with a stale recipe reference.
    let listed = app
        .request(
            "GET",
            &format!("/api/meal-plans/{plan_id}/items"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.data().as_array().map(|a| a.len()), Some(1));
}
