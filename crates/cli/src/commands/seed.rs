//! Seed the storefront database with bootstrap data.
//!
//! Runs the same loader as `POST /api/init-data`: the default admin account,
//! the baseline categories, and the baseline products, each only if absent.

use emporium_storefront::services::seed::{ADMIN_EMAIL, SeedLoader};
use emporium_storefront::services::token::TokenService;
use tracing::info;

use super::connect_store;

/// Seed whatever bootstrap data is missing.
///
/// # Errors
///
/// Returns an error if configuration is missing or database operations fail.
pub async fn baseline() -> Result<(), Box<dyn std::error::Error>> {
    let (store, jwt_secret) = connect_store().await?;
    let tokens = TokenService::new(&jwt_secret);

    let report = SeedLoader::new(&store, &tokens).initialize().await?;

    info!("Seeding complete!");
    if report.admin_created {
        info!("  Admin account created: {ADMIN_EMAIL}");
        tracing::warn!("  Change the default admin password before going live");
    } else {
        info!("  Admin account already present");
    }
    info!("  Categories inserted: {}", report.categories_inserted);
    info!("  Products inserted: {}", report.products_inserted);

    Ok(())
}
