//! Cart repository. One document per user, keyed by `user_id`.

use emporium_core::UserId;

use super::{Collection, DocumentStore, Filter, RepositoryError, from_document, to_document};
use crate::models::cart::Cart;

/// Repository for cart documents.
pub struct CartRepository<'a> {
    store: &'a dyn DocumentStore,
}

fn owner(user_id: &UserId) -> Filter {
    Filter::all().eq("user_id", user_id.as_str())
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// The stored cart for a user, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or the document is invalid.
    pub async fn get(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        self.store
            .find_one(Collection::Carts, &owner(user_id))
            .await?
            .map(from_document)
            .transpose()
    }

    /// Insert or fully replace the cart of `cart.user_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn upsert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        self.store
            .upsert_one(Collection::Carts, &owner(&cart.user_id), to_document(cart)?)
            .await
    }

    /// Delete a user's cart. Deleting a missing cart is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        self.store
            .delete_one(Collection::Carts, &owner(user_id))
            .await?;
        Ok(())
    }
}
