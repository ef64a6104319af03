//! Order repository.

use emporium_core::{OrderId, OrderStatus, UserId};
use serde_json::Value;

use super::{
    Collection, Document, DocumentStore, Filter, FindOptions, RepositoryError, from_documents,
    to_document,
};
use crate::models::order::Order;

/// Repository for order documents.
pub struct OrderRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Store a new order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        self.store
            .insert_one(Collection::Orders, to_document(order)?)
            .await
    }

    /// Orders for one user (or all users), newest first, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or a document is invalid.
    pub async fn list_newest(
        &self,
        user_id: Option<&UserId>,
        limit: usize,
    ) -> Result<Vec<Order>, RepositoryError> {
        let filter = match user_id {
            Some(user_id) => Filter::all().eq("user_id", user_id.as_str()),
            None => Filter::all(),
        };
        let documents = self
            .store
            .find(
                Collection::Orders,
                &filter,
                FindOptions::limit(limit).newest_first("created_at"),
            )
            .await?;
        from_documents(documents)
    }

    /// Overwrite an order's status. Returns `false` if no order has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_status(
        &self,
        id: &OrderId,
        status: &OrderStatus,
    ) -> Result<bool, RepositoryError> {
        let mut changes = Document::new();
        changes.insert("status".to_owned(), Value::from(status.as_str()));

        let matched = self
            .store
            .update_one(Collection::Orders, &Filter::all().eq("id", id.as_str()), changes)
            .await?;
        Ok(matched > 0)
    }
}
