//! Customer order route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::middleware::RequireAuth;
use crate::models::order::{NewOrder, Order};
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Place an order. The caller's cart is emptied afterwards.
#[instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    ApiJson(details): ApiJson<NewOrder>,
) -> Result<Json<Order>> {
    let orders = OrderService::new(state.store());
    Ok(Json(orders.create(&identity, details).await?))
}

/// The caller's orders, newest first.
#[instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.store());
    Ok(Json(orders.list_mine(&identity).await?))
}
