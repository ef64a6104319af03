//! Product repository.

use emporium_core::ProductId;

use super::{
    Collection, DocumentStore, Filter, FindOptions, RepositoryError, from_document,
    from_documents, to_document,
};
use crate::models::catalog::{Product, ProductInput};

/// Repository for product documents.
pub struct ProductRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Products matching `filter` in store order, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or a document is invalid.
    pub async fn find(&self, filter: &Filter, limit: usize) -> Result<Vec<Product>, RepositoryError> {
        let documents = self
            .store
            .find(Collection::Products, filter, FindOptions::limit(limit))
            .await?;
        from_documents(documents)
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or the document is invalid.
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.store
            .find_one(Collection::Products, &Filter::all().eq("id", id.as_str()))
            .await?
            .map(from_document)
            .transpose()
    }

    /// Store a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        self.store
            .insert_one(Collection::Products, to_document(product)?)
            .await
    }

    /// Store several products at once.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_many(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let documents = products
            .iter()
            .map(to_document)
            .collect::<Result<Vec<_>, _>>()?;
        self.store
            .insert_many(Collection::Products, documents)
            .await
    }

    /// Replace the mutable fields of a product.
    ///
    /// Returns `false` if no product has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<bool, RepositoryError> {
        let matched = self
            .store
            .update_one(
                Collection::Products,
                &Filter::all().eq("id", id.as_str()),
                to_document(input)?,
            )
            .await?;
        Ok(matched > 0)
    }

    /// Delete a product. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        let deleted = self
            .store
            .delete_one(Collection::Products, &Filter::all().eq("id", id.as_str()))
            .await?;
        Ok(deleted > 0)
    }

    /// Total number of products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.store.count(Collection::Products, &Filter::all()).await
    }
}
