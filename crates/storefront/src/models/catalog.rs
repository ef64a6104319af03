//! Catalog models: products and categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use emporium_core::{CategoryId, Price, ProductId};

use super::timestamp;

const fn default_stock() -> i64 {
    100
}

/// The mutable fields of a product, as submitted by an admin.
///
/// Updates replace all of these at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Free text; by convention a category slug.
    pub category: String,
    pub image: String,
    #[serde(default = "default_stock")]
    pub stock: i64,
    #[serde(default)]
    pub featured: bool,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub details: ProductInput,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with a fresh ID and creation time.
    #[must_use]
    pub fn new(details: ProductInput) -> Self {
        Self {
            id: ProductId::generate(),
            details,
            created_at: timestamp::now(),
        }
    }
}

/// The mutable fields of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    /// Intended unique; not enforced.
    pub slug: String,
    pub image: String,
    pub description: String,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(flatten)]
    pub details: CategoryInput,
}

impl Category {
    /// Create a category with a fresh ID.
    #[must_use]
    pub fn new(details: CategoryInput) -> Self {
        Self {
            id: CategoryId::generate(),
            details,
        }
    }
}
