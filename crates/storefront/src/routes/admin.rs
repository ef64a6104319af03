//! Admin-only route handlers: all orders, order status, users, settings.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use emporium_core::{OrderId, OrderStatus};

use super::Message;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::RequireAdmin;
use crate::models::order::Order;
use crate::models::settings::SiteSettings;
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::services::orders::OrderService;
use crate::services::settings::SettingsService;
use crate::state::AppState;

/// New status, from `?status=` or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<OrderStatus>,
}

/// Resolve the requested status. The query parameter wins over the body.
fn requested_status(query: StatusUpdate, body: &Bytes) -> Result<OrderStatus> {
    if let Some(status) = query.status {
        return Ok(status);
    }
    if body.is_empty() {
        return Err(AppError::BadRequest("status is required".to_owned()));
    }

    let parsed: StatusUpdate = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid status body: {e}")))?;
    parsed
        .status
        .ok_or_else(|| AppError::BadRequest("status is required".to_owned()))
}

/// Every order, newest first.
#[instrument(skip_all, fields(admin_id = %admin.user_id))]
pub async fn orders(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.store());
    Ok(Json(orders.list_all().await?))
}

/// Overwrite an order's status.
#[instrument(skip(state, admin, query, body), fields(admin_id = %admin.user_id))]
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<OrderId>,
    ApiQuery(query): ApiQuery<StatusUpdate>,
    body: Bytes,
) -> Result<Json<Message>> {
    let status = requested_status(query, &body)?;
    let orders = OrderService::new(state.store());
    orders.update_status(&id, &status).await?;
    Ok(Json(Message::new("Order updated")))
}

/// Every user account, without password hashes.
#[instrument(skip_all, fields(admin_id = %admin.user_id))]
pub async fn users(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Vec<User>>> {
    let auth = AuthService::new(state.store(), state.tokens());
    Ok(Json(auth.list_users().await?))
}

/// Replace the site settings.
#[instrument(skip_all, fields(admin_id = %admin.user_id))]
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(settings): ApiJson<SiteSettings>,
) -> Result<Json<SiteSettings>> {
    let service = SettingsService::new(state.store());
    Ok(Json(service.update(settings).await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn query(status: Option<&str>) -> StatusUpdate {
        StatusUpdate {
            status: status.map(OrderStatus::new),
        }
    }

    #[test]
    fn test_query_status_wins() {
        let body = Bytes::from_static(br#"{"status":"cancelled"}"#);
        let status = requested_status(query(Some("shipped")), &body).unwrap();
        assert_eq!(status.as_str(), "shipped");
    }

    #[test]
    fn test_body_status_is_used_without_query() {
        let body = Bytes::from_static(br#"{"status":"delivered"}"#);
        let status = requested_status(query(None), &body).unwrap();
        assert_eq!(status.as_str(), "delivered");
    }

    #[test]
    fn test_missing_status_is_rejected() {
        assert!(matches!(
            requested_status(query(None), &Bytes::new()),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            requested_status(query(None), &Bytes::from_static(b"{}")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            requested_status(query(None), &Bytes::from_static(b"not json")),
            Err(AppError::BadRequest(_))
        ));
    }
}
