//! Admin order management, user listing, site settings, and seeding.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use emporium_integration_tests::{TestApp, order_documents};
use emporium_storefront::db::{Collection, DocumentStore, Filter};
use serde_json::{Value, json};

async fn place_order(app: &TestApp, token: &str) -> String {
    let response = app
        .post(
            "/api/orders",
            Some(token),
            &json!({
                "items": [{"product_id": "p1", "product_name": "Lamp", "quantity": 1, "price": 5}],
                "total": 5,
                "address": {"line1": "1 Main St"},
                "payment_method": "cod",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["id"].as_str().unwrap().to_owned()
}

async fn order_status(app: &TestApp, admin: &str, id: &str) -> Value {
    let orders = app.get("/api/admin/orders", Some(admin)).await;
    orders
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["id"] == id)
        .map(|o| o["status"].clone())
        .unwrap()
}

#[tokio::test]
async fn test_admin_sees_all_orders() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let alice = app.signup("alice@example.com").await;
    let bob = app.signup("bob@example.com").await;
    place_order(&app, &alice).await;
    place_order(&app, &bob).await;

    let response = app.get("/api/admin/orders", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let customer = app.get("/api/admin/orders", Some(&alice)).await;
    assert_eq!(customer.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_order_listing_is_capped() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    for owner in ["u1", "u2", "u3"] {
        app.store()
            .insert_many(Collection::Orders, order_documents(owner, 350))
            .await
            .unwrap();
    }

    let response = app.get("/api/admin/orders", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let orders = response.body.as_array().unwrap();
    assert_eq!(orders.len(), 1000);
    assert_eq!(orders.first().unwrap()["created_at"], "2026-01-01T00:05:49.000000Z");
}

#[tokio::test]
async fn test_status_update_from_query() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let customer = app.signup("c@example.com").await;
    let id = place_order(&app, &customer).await;

    let response = app
        .request(
            axum::http::Method::PUT,
            &format!("/api/admin/orders/{id}?status=shipped"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "Order updated"}));
    assert_eq!(order_status(&app, &admin, &id).await, "shipped");
}

#[tokio::test]
async fn test_status_update_from_body() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let customer = app.signup("c@example.com").await;
    let id = place_order(&app, &customer).await;

    let response = app
        .put(
            &format!("/api/admin/orders/{id}"),
            Some(&admin),
            &json!({"status": "out for delivery"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(order_status(&app, &admin, &id).await, "out for delivery");
}

#[tokio::test]
async fn test_status_update_errors() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let customer = app.signup("c@example.com").await;
    let id = place_order(&app, &customer).await;

    let missing = app
        .request(
            axum::http::Method::PUT,
            "/api/admin/orders/nope?status=shipped",
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Order not found");

    let no_status = app
        .request(
            axum::http::Method::PUT,
            &format!("/api/admin/orders/{id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(no_status.status, StatusCode::BAD_REQUEST);

    let forbidden = app
        .request(
            axum::http::Method::PUT,
            &format!("/api/admin/orders/{id}?status=cancelled"),
            Some(&customer),
            None,
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(order_status(&app, &admin, &id).await, "pending");
}

#[tokio::test]
async fn test_admin_user_listing_hides_hashes() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    app.signup("listed@example.com").await;

    let response = app.get("/api/admin/users", Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
    assert!(users.iter().any(|u| u["role"] == "admin"));
}

#[tokio::test]
async fn test_settings_default_then_replace() {
    let app = TestApp::new();

    let defaults = app.get("/api/settings", None).await;
    assert_eq!(defaults.status, StatusCode::OK);
    assert_eq!(
        defaults.body,
        json!({
            "theme_colors": {"primary": "#FACC15", "background": "#09090b"},
            "payment_methods": {"upi": true, "card": true, "cod": true},
        })
    );

    let admin = app.admin_token().await;
    let replacement = json!({
        "theme_colors": {"primary": "#000000", "background": "#ffffff"},
        "payment_methods": {"upi": false, "card": true, "cod": false},
    });
    let updated = app
        .put("/api/admin/settings", Some(&admin), &replacement)
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let current = app.get("/api/settings", None).await;
    assert_eq!(current.body, replacement);
    assert_eq!(
        app.store()
            .count(Collection::SiteSettings, &Filter::all())
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_settings_update_requires_admin() {
    let app = TestApp::new();
    let customer = app.signup("c@example.com").await;
    let response = app
        .put("/api/admin/settings", Some(&customer), &json!({}))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_init_data_is_idempotent() {
    let app = TestApp::new();

    for _ in 0..2 {
        let response = app.post("/api/init-data", None, &json!({})).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"message": "Data initialized"}));
    }

    let store = app.store();
    let admins = store
        .count(
            Collection::Users,
            &Filter::all().eq("email", "admin@shop.com"),
        )
        .await
        .unwrap();
    assert_eq!(admins, 1);
    assert_eq!(
        store
            .count(Collection::Categories, &Filter::all())
            .await
            .unwrap(),
        6
    );
    assert_eq!(
        store
            .count(Collection::Products, &Filter::all())
            .await
            .unwrap(),
        30
    );
}

#[tokio::test]
async fn test_init_data_accepts_empty_body() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::post("/api/init-data")
                .header(header::CONTENT_LENGTH, "0")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
