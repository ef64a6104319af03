//! Cart route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::middleware::RequireAuth;
use crate::models::cart::{Cart, CartItem};
use crate::services::cart::CartService;
use crate::state::AppState;

/// Cart replacement body. Any `user_id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct CartUpdate {
    pub items: Vec<CartItem>,
}

/// The caller's cart.
#[instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<Cart>> {
    let carts = CartService::new(state.store());
    Ok(Json(carts.get(&identity).await?))
}

/// Replace the caller's cart items.
#[instrument(skip_all, fields(user_id = %identity.user_id, items = body.items.len()))]
pub async fn replace(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    ApiJson(body): ApiJson<CartUpdate>,
) -> Result<Json<Cart>> {
    let carts = CartService::new(state.store());
    Ok(Json(carts.replace(&identity, body.items).await?))
}
