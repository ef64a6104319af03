//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! # Auth
//! POST /api/auth/signup             - Create account, returns {token, user}
//! POST /api/auth/login              - Returns {token, user}
//! GET  /api/auth/me                 - Current user (auth)
//!
//! # Catalog
//! GET    /api/products              - List (?category=&search=)
//! GET    /api/products/featured     - Featured products
//! GET    /api/products/{id}         - Product detail
//! POST   /api/products              - Create (admin)
//! PUT    /api/products/{id}         - Replace (admin)
//! DELETE /api/products/{id}         - Delete (admin)
//! GET    /api/categories            - List
//! POST   /api/categories            - Create (admin)
//! PUT    /api/categories/{id}       - Replace (admin)
//! DELETE /api/categories/{id}       - Delete (admin)
//!
//! # Cart and orders (auth)
//! GET  /api/cart                    - Own cart or empty default
//! POST /api/cart                    - Replace items
//! POST /api/orders                  - Place order, clears cart
//! GET  /api/orders                  - Own orders, newest first
//!
//! # Admin
//! GET /api/admin/orders             - All orders
//! PUT /api/admin/orders/{id}        - Set status (?status= or {"status"})
//! GET /api/admin/users              - All users
//! PUT /api/admin/settings           - Replace site settings
//!
//! # Site
//! GET  /api/settings                - Site settings
//! POST /api/init-data               - Seed admin and baseline catalog
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// `{"message": ...}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/featured", get(products::featured))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            put(categories::update).delete(categories::delete),
        )
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(admin::orders))
        .route("/orders/{id}", put(admin::update_order_status))
        .route("/users", get(admin::users))
        .route("/settings", put(admin::update_settings))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        .route("/cart", get(cart::show).post(cart::replace))
        .route("/orders", get(orders::index).post(orders::create))
        .nest("/admin", admin_routes())
        .route("/settings", get(settings::show))
        .route("/init-data", post(settings::init_data))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}
