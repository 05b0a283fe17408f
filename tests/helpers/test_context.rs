//! Test context for unified test setup
//!
//! Builds the full router over an in-memory store so tests can drive the
//! HTTP surface end to end with `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use levelup_events::{
    config::Settings,
    database::{DatabaseService, MemoryStore},
    handlers::AppState,
    server,
    services::{AuthService, ServiceFactory},
};

use super::test_data::{seed_fixtures, Fixtures};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
    /// Parsed body; `Value::Null` when empty or not JSON
    pub json: Value,
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub fixtures: Fixtures,
    pub settings: Settings,
    pub auth: AuthService,
    pub app: Router,
}

impl TestContext {
    /// Create a new test context with seeded fixtures
    pub async fn new() -> Self {
        Self::new_with_settings(test_settings()).await
    }

    pub async fn new_with_settings(settings: Settings) -> Self {
        let store = Arc::new(MemoryStore::new());
        let database = DatabaseService::in_memory(store.clone());
        Self::new_with_database(settings, store, database).await
    }

    /// Seed `store` but serve requests through `database`, which may wrap it
    pub async fn new_with_database(settings: Settings, store: Arc<MemoryStore>, database: DatabaseService) -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt::try_init();

        let fixtures = seed_fixtures(&store).await;
        let services = ServiceFactory::new(&settings, database);
        let auth = services.auth_service.clone();
        let app = server::router(AppState::new(services));

        Self {
            store,
            fixtures,
            settings,
            auth,
            app,
        }
    }

    /// `Authorization` header value for a user
    pub fn token_for(&self, user_id: i64) -> String {
        let token = self.auth.issue_token(user_id).expect("Failed to issue token");
        format!("Token {}", token)
    }

    /// Send a request as the given user (or anonymously)
    pub async fn request(&self, method: Method, uri: &str, user_id: Option<i64>, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header(header::AUTHORIZATION, self.token_for(user_id));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.expect("Router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&bytes).to_string();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, text, json }
    }
}

/// Settings used by every router test
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.database.url = "memory://".to_string();
    settings.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    settings.logging.level = "debug".to_string();
    settings
}
