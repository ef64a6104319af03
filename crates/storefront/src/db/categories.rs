//! Category repository.

use emporium_core::CategoryId;

use super::{
    Collection, DocumentStore, Filter, FindOptions, RepositoryError, from_document,
    from_documents, to_document,
};
use crate::models::catalog::{Category, CategoryInput};

/// Repository for category documents.
pub struct CategoryRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// All categories in store order, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or a document is invalid.
    pub async fn list(&self, limit: usize) -> Result<Vec<Category>, RepositoryError> {
        let documents = self
            .store
            .find(Collection::Categories, &Filter::all(), FindOptions::limit(limit))
            .await?;
        from_documents(documents)
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or the document is invalid.
    pub async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        self.store
            .find_one(Collection::Categories, &Filter::all().eq("id", id.as_str()))
            .await?
            .map(from_document)
            .transpose()
    }

    /// Store a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        self.store
            .insert_one(Collection::Categories, to_document(category)?)
            .await
    }

    /// Store several categories at once.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_many(&self, categories: &[Category]) -> Result<(), RepositoryError> {
        let documents = categories
            .iter()
            .map(to_document)
            .collect::<Result<Vec<_>, _>>()?;
        self.store
            .insert_many(Collection::Categories, documents)
            .await
    }

    /// Replace the mutable fields of a category. Returns `false` if absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<bool, RepositoryError> {
        let matched = self
            .store
            .update_one(
                Collection::Categories,
                &Filter::all().eq("id", id.as_str()),
                to_document(input)?,
            )
            .await?;
        Ok(matched > 0)
    }

    /// Delete a category. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &CategoryId) -> Result<bool, RepositoryError> {
        let deleted = self
            .store
            .delete_one(Collection::Categories, &Filter::all().eq("id", id.as_str()))
            .await?;
        Ok(deleted > 0)
    }

    /// Total number of categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.store.count(Collection::Categories, &Filter::all()).await
    }
}
