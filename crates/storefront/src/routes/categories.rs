//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use emporium_core::CategoryId;

use super::Message;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::middleware::RequireAdmin;
use crate::models::catalog::{Category, CategoryInput};
use crate::services::catalog::CatalogService;
use crate::state::AppState;

/// List categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.list_categories().await?))
}

/// Create a category.
#[instrument(skip_all, fields(admin_id = %admin.user_id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<Json<Category>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.create_category(input).await?))
}

/// Replace a category's fields.
#[instrument(skip(state, admin, input), fields(admin_id = %admin.user_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<CategoryId>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<Json<Category>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.update_category(&id, &input).await?))
}

/// Delete a category.
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<CategoryId>,
) -> Result<Json<Message>> {
    let catalog = CatalogService::new(state.store());
    catalog.delete_category(&id).await?;
    Ok(Json(Message::new("Category deleted")))
}
