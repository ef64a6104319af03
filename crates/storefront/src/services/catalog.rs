//! Catalog service: products and categories.

use emporium_core::{CategoryId, ProductId};

use super::ServiceError;
use crate::db::categories::CategoryRepository;
use crate::db::products::ProductRepository;
use crate::db::{DocumentStore, Filter};
use crate::models::catalog::{Category, CategoryInput, Product, ProductInput};

/// Maximum products returned by a listing.
pub const PRODUCT_LIST_LIMIT: usize = 1000;
/// Maximum featured products returned.
pub const FEATURED_LIMIT: usize = 20;
/// Maximum categories returned.
pub const CATEGORY_LIST_LIMIT: usize = 100;

/// Product listing criteria. Both are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring of the product name, matched literally.
    pub search: Option<String>,
}

/// Catalog operations over products and categories.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
    categories: CategoryRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            products: ProductRepository::new(store),
            categories: CategoryRepository::new(store),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List products in store order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ServiceError> {
        let mut filter = Filter::all();
        if let Some(category) = &query.category {
            filter = filter.eq("category", category.as_str());
        }
        if let Some(search) = &query.search {
            filter = filter.contains_ignore_case("name", search.as_str());
        }
        Ok(self.products.find(&filter, PRODUCT_LIST_LIMIT).await?)
    }

    /// List featured products.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn list_featured(&self) -> Result<Vec<Product>, ServiceError> {
        let filter = Filter::all().eq("featured", true);
        Ok(self.products.find(&filter, FEATURED_LIMIT).await?)
    }

    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no product has this ID.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Product"))
    }

    /// Create a product with a fresh ID and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ServiceError> {
        let product = Product::new(input);
        self.products.create(&product).await?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Replace every mutable field of a product and return the stored result.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no product has this ID.
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ServiceError> {
        if !self.products.update(id, input).await? {
            return Err(ServiceError::NotFound("Product"));
        }
        self.get_product(id).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if nothing was deleted.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ServiceError> {
        if !self.products.delete(id).await? {
            return Err(ServiceError::NotFound("Product"));
        }
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// List categories in store order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.list(CATEGORY_LIST_LIMIT).await?)
    }

    /// Create a category with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn create_category(&self, input: CategoryInput) -> Result<Category, ServiceError> {
        let category = Category::new(input);
        self.categories.create(&category).await?;
        tracing::info!(category_id = %category.id, "Category created");
        Ok(category)
    }

    /// Replace every mutable field of a category and return the stored result.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no category has this ID.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ServiceError> {
        if !self.categories.update(id, input).await? {
            return Err(ServiceError::NotFound("Category"));
        }
        self.categories
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Category"))
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if nothing was deleted.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ServiceError> {
        if !self.categories.delete(id).await? {
            return Err(ServiceError::NotFound("Category"));
        }
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
