//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use emporium_core::ProductId;

use super::Message;
use crate::error::Result;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::RequireAdmin;
use crate::models::catalog::{Product, ProductInput};
use crate::services::catalog::{CatalogService, ProductQuery};
use crate::state::AppState;

/// Listing filters. Empty values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl From<ListQuery> for ProductQuery {
    fn from(query: ListQuery) -> Self {
        Self {
            category: query.category.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
        }
    }
}

/// List products, optionally by category and name search.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.list_products(&query.into()).await?))
}

/// List featured products.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.list_featured().await?))
}

/// Show a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.get_product(&id).await?))
}

/// Create a product.
#[instrument(skip_all, fields(admin_id = %admin.user_id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<Json<Product>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.create_product(input).await?))
}

/// Replace a product's fields.
#[instrument(skip(state, admin, input), fields(admin_id = %admin.user_id))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<ProductId>,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<Json<Product>> {
    let catalog = CatalogService::new(state.store());
    Ok(Json(catalog.update_product(&id, &input).await?))
}

/// Delete a product.
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<Message>> {
    let catalog = CatalogService::new(state.store());
    catalog.delete_product(&id).await?;
    Ok(Json(Message::new("Product deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_are_ignored() {
        let query: ProductQuery = ListQuery {
            category: Some(String::new()),
            search: Some("mouse".to_owned()),
        }
        .into();
        assert_eq!(query.category, None);
        assert_eq!(query.search.as_deref(), Some("mouse"));
    }
}
