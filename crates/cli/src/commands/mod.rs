//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use emporium_storefront::config::StorefrontConfig;
use emporium_storefront::db::{self, PgDocumentStore};
use secrecy::SecretString;

/// Errors opening the storefront database.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Configuration error: {0}")]
    Config(#[from] emporium_storefront::config::ConfigError),

    #[error("EMPORIUM_DATABASE_URL is required")]
    MissingDatabaseUrl,

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Load the storefront configuration and connect to its database.
///
/// Returns the JWT secret alongside the store since services that can
/// issue tokens need it.
pub async fn connect_store() -> Result<(PgDocumentStore, SecretString), ConnectError> {
    let config = StorefrontConfig::from_env()?;
    let url = config
        .database_url
        .as_ref()
        .ok_or(ConnectError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to storefront database...");
    let pool = db::create_pool(url).await?;
    Ok((PgDocumentStore::new(pool), config.jwt_secret))
}
