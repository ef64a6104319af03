//! Idempotent bootstrap data.
//!
//! Creates the default admin account and the baseline catalog. Each part is
//! checked independently, so a partial earlier run is completed rather than
//! duplicated.

mod data;

use emporium_core::{Price, Role};
use serde::Serialize;

use super::ServiceError;
use super::auth::{AuthError, AuthService};
use crate::db::DocumentStore;
use crate::db::categories::CategoryRepository;
use crate::db::products::ProductRepository;
use crate::models::catalog::{Category, CategoryInput, Product, ProductInput};
use crate::services::token::TokenService;

pub use data::{ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD};

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub admin_created: bool,
    pub categories_inserted: usize,
    pub products_inserted: usize,
}

/// Errors from seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A baseline price is not a valid price.
    #[error("invalid baseline price for {0}")]
    InvalidPrice(&'static str),
}

/// Inserts the default admin and baseline catalog when absent.
pub struct SeedLoader<'a> {
    auth: AuthService<'a>,
    categories: CategoryRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> SeedLoader<'a> {
    /// Create a new seed loader.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore, tokens: &'a TokenService) -> Self {
        Self {
            auth: AuthService::new(store, tokens),
            categories: CategoryRepository::new(store),
            products: ProductRepository::new(store),
        }
    }

    /// Seed whatever is missing.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the store fails.
    pub async fn initialize(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        if !self.auth.account_exists(ADMIN_EMAIL).await? {
            match self
                .auth
                .create_account(ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_NAME, Role::Admin)
                .await
            {
                Ok(_) => report.admin_created = true,
                // Another seed run created it in the meantime.
                Err(AuthError::DuplicateEmail) => {}
                Err(e) => return Err(e.into()),
            }
        }

        if self.categories.count().await.map_err(ServiceError::from)? == 0 {
            let categories = baseline_categories();
            self.categories
                .create_many(&categories)
                .await
                .map_err(ServiceError::from)?;
            report.categories_inserted = categories.len();
        }

        if self.products.count().await.map_err(ServiceError::from)? == 0 {
            let products = baseline_products()?;
            self.products
                .create_many(&products)
                .await
                .map_err(ServiceError::from)?;
            report.products_inserted = products.len();
        }

        tracing::info!(
            admin_created = report.admin_created,
            categories = report.categories_inserted,
            products = report.products_inserted,
            "Seed data initialized"
        );
        Ok(report)
    }
}

fn baseline_categories() -> Vec<Category> {
    data::CATEGORIES
        .iter()
        .map(|c| {
            Category::new(CategoryInput {
                name: c.name.to_owned(),
                slug: c.slug.to_owned(),
                image: c.image.to_owned(),
                description: c.description.to_owned(),
            })
        })
        .collect()
}

fn baseline_products() -> Result<Vec<Product>, SeedError> {
    data::PRODUCTS
        .iter()
        .map(|p| {
            let price = Price::from_cents(p.price_cents).map_err(|_| SeedError::InvalidPrice(p.name))?;
            Ok(Product::new(ProductInput {
                name: p.name.to_owned(),
                description: p.description.to_owned(),
                price,
                category: p.category.to_owned(),
                image: format!("https://images.unsplash.com/photo-{}?w=500", p.image_id),
                stock: p.stock,
                featured: p.featured,
            }))
        })
        .collect()
}
