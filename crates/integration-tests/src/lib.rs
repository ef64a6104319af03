//! Integration test harness for Emporium.
//!
//! Tests drive the full storefront router in-process over the in-memory
//! document store; no server or database is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emporium-integration-tests
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use emporium_storefront::config::StorefrontConfig;
use emporium_storefront::db::{Document, DocumentStore, MemoryDocumentStore};
use emporium_storefront::services::seed::{ADMIN_EMAIL, ADMIN_PASSWORD};
use emporium_storefront::state::AppState;

/// Signing secret shared by every test app.
pub const TEST_JWT_SECRET: &str = "Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%";

/// A response with its body parsed as JSON (`Null` when empty or not JSON).
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The stable error code of an error response.
    #[must_use]
    pub fn code(&self) -> &str {
        self.body["code"].as_str().unwrap_or_default()
    }
}

/// An application instance with its own empty store.
pub struct TestApp {
    router: Router,
    store: Arc<MemoryDocumentStore>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Build an app over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        let config = StorefrontConfig::in_memory(SecretString::from(TEST_JWT_SECRET.to_owned()));
        let shared: Arc<dyn DocumentStore> = store.clone();
        let router = emporium_storefront::app(AppState::new(config, shared));
        Self { router, store }
    }

    /// The backing store, for assertions on persisted state.
    #[must_use]
    pub fn store(&self) -> &MemoryDocumentStore {
        &self.store
    }

    /// Send a request with an optional bearer token and JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body cannot be read.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: &Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: &Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Sign up a customer and return their token.
    ///
    /// # Panics
    ///
    /// Panics if signup fails.
    pub async fn signup(&self, email: &str) -> String {
        let response = self
            .post(
                "/api/auth/signup",
                None,
                &json!({"email": email, "password": "hunter22", "name": "Test Customer"}),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "signup failed: {:?}", response.body);
        token_of(&response)
    }

    /// Seed the store and return a token for the default admin.
    ///
    /// # Panics
    ///
    /// Panics if seeding or login fails.
    pub async fn admin_token(&self) -> String {
        let seeded = self.post("/api/init-data", None, &json!({})).await;
        assert_eq!(seeded.status, StatusCode::OK);

        let response = self
            .post(
                "/api/auth/login",
                None,
                &json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "admin login failed");
        token_of(&response)
    }
}

/// The `token` field of an auth response.
///
/// # Panics
///
/// Panics if the body has no token.
#[must_use]
pub fn token_of(response: &TestResponse) -> String {
    response.body["token"]
        .as_str()
        .expect("response has no token")
        .to_owned()
}

/// A valid product body.
#[must_use]
pub fn product_body(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Integration test product",
        "price": 19.99,
        "category": category,
        "image": "https://images.example/p.jpg",
    })
}

fn document(value: &Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}

/// Stored creation time of the `n`th fixture, `n` seconds after a fixed start.
fn fixture_time(n: usize) -> String {
    format!(
        "2026-01-01T{:02}:{:02}:{:02}.000000Z",
        n / 3600,
        n / 60 % 60,
        n % 60
    )
}

/// `count` product documents ready for the store, oldest first.
#[must_use]
pub fn product_documents(count: usize, featured: bool) -> Vec<Document> {
    (0..count)
        .map(|n| {
            document(&json!({
                "id": format!("fixture-product-{n}"),
                "name": format!("Fixture {n}"),
                "description": "Bulk fixture",
                "price": 5.0,
                "category": "fixtures",
                "image": "https://images.example/f.jpg",
                "stock": 10,
                "featured": featured,
                "created_at": fixture_time(n),
            }))
        })
        .collect()
}

/// `count` category documents ready for the store.
#[must_use]
pub fn category_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|n| {
            document(&json!({
                "id": format!("fixture-category-{n}"),
                "name": format!("Fixture {n}"),
                "slug": format!("fixture-{n}"),
                "image": "https://images.example/c.jpg",
                "description": "Bulk fixture",
            }))
        })
        .collect()
}

/// `count` order documents owned by `user_id`, the `n`th created `n`
/// seconds after a fixed start.
#[must_use]
pub fn order_documents(user_id: &str, count: usize) -> Vec<Document> {
    (0..count)
        .map(|n| {
            document(&json!({
                "id": format!("fixture-order-{user_id}-{n}"),
                "user_id": user_id,
                "items": [],
                "total": 5.0,
                "address": {"city": "Pune"},
                "payment_method": "cod",
                "status": "pending",
                "created_at": fixture_time(n),
            }))
        })
        .collect()
}
