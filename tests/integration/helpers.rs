//! Shared test harness.
//!
//! Builds the full application (config, pool, migrations, state, router)
//! against a real PostgreSQL instance and drives it in-process through
//! `tower::ServiceExt::oneshot`. Set `TEST_DATABASE_URL` to override the
//! database from `config/test.toml`.
//!
//! Isolation comes from identity, not from wiping tables: every test mints
//! fresh identities with unique usernames, and every visible row is scoped
//! to its owner (or carries a unique marker), so tests can run in parallel
//! and repeatedly against one shared scratch database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use mealhub_api::router::build_router;
use mealhub_api::state::AppState;
use mealhub_auth::identity::IdentityClaims;
use mealhub_core::config::AppConfig;
use mealhub_database::connection::DatabasePool;
use mealhub_database::migration::run_migrations;

/// A fully wired application instance for tests.
pub struct TestApp {
    /// The complete router with all middleware.
    pub router: Router,
    /// Direct pool handle for fixture setup and assertions.
    pub db_pool: PgPool,
    /// The test configuration.
    pub config: AppConfig,
}

impl TestApp {
    /// Build a fresh app against a clean database.
    pub async fn new() -> Self {
        let mut config = AppConfig::load("test").expect("Failed to load test configuration");
        if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            config.database.url = url;
        }

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        let state = AppState::new(Arc::new(config.clone()), db);
        let router = build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Mint a fresh identity and a session token for it, as the external
    /// provider would. The username carries a per-identity suffix so it
    /// never collides with earlier runs; the profile row materializes on
    /// the first request.
    pub fn issue_identity(&self, name: &str) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        let username = format!("{name}-{}", &user_id.simple().to_string()[..8]);
        let token = self.token_for(user_id, &username);
        (user_id, token)
    }

    /// Sign an HS256 session token with the configured shared secret.
    pub fn token_for(&self, user_id: Uuid, username: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = IdentityClaims {
            sub: user_id,
            exp: now + 3600,
            iat: Some(now),
            iss: None,
            username: Some(username.to_string()),
            email: None,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.identity.jwt_secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    /// Create a recipe via the API and return its id.
    pub async fn create_recipe(
        &self,
        user_id: Uuid,
        token: &str,
        title: &str,
        is_public: bool,
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/recipes",
                Some(serde_json::json!({
                    "user_id": user_id,
                    "title": title,
                    "is_public": is_public,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Recipe creation failed: {:?}",
            response.body
        );
        response.id()
    }

    /// Create a meal plan via the API and return its id.
    pub async fn create_meal_plan(&self, user_id: Uuid, token: &str, title: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/meal-plans",
                Some(serde_json::json!({
                    "user_id": user_id,
                    "title": title,
                    "start_date": "2026-08-24",
                    "end_date": "2026-08-30",
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Meal plan creation failed: {:?}",
            response.body
        );
        response.id()
    }

    /// Create a shopping list via the API and return its id.
    pub async fn create_shopping_list(&self, user_id: Uuid, token: &str, title: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/shopping-lists",
                Some(serde_json::json!({
                    "user_id": user_id,
                    "title": title,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Shopping list creation failed: {:?}",
            response.body
        );
        response.id()
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

impl TestResponse {
    /// Extract the `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }

    /// Extract `data.id` as a UUID.
    pub fn id(&self) -> Uuid {
        self.data()
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No id in response data")
    }
}
