//! Public site settings and bootstrap data.

use axum::{Json, extract::State};
use tracing::instrument;

use super::Message;
use crate::error::Result;
use crate::models::settings::SiteSettings;
use crate::services::seed::SeedLoader;
use crate::services::settings::SettingsService;
use crate::state::AppState;

/// The site settings, created with defaults on first read.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    let service = SettingsService::new(state.store());
    Ok(Json(service.get().await?))
}

/// Seed the default admin and baseline catalog where missing.
///
/// Unauthenticated, matching the bootstrap flow of fresh deployments.
#[instrument(skip(state))]
pub async fn init_data(State(state): State<AppState>) -> Result<Json<Message>> {
    SeedLoader::new(state.store(), state.tokens())
        .initialize()
        .await?;
    Ok(Json(Message::new("Data initialized")))
}
