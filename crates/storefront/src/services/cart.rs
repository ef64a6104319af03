//! Cart service: one fully-replaceable cart per user.

use super::ServiceError;
use crate::db::DocumentStore;
use crate::db::carts::CartRepository;
use crate::models::cart::{Cart, CartItem};
use crate::models::timestamp;
use crate::services::token::Identity;

/// Per-user cart operations. The owner always comes from the identity.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            carts: CartRepository::new(store),
        }
    }

    /// The caller's cart, or an empty unsaved cart.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn get(&self, identity: &Identity) -> Result<Cart, ServiceError> {
        Ok(self
            .carts
            .get(&identity.user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(identity.user_id.clone())))
    }

    /// Replace the caller's cart items. Items are stored as given.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn replace(
        &self,
        identity: &Identity,
        items: Vec<CartItem>,
    ) -> Result<Cart, ServiceError> {
        let cart = Cart {
            user_id: identity.user_id.clone(),
            items,
            updated_at: Some(timestamp::now()),
        };
        self.carts.upsert(&cart).await?;
        Ok(cart)
    }

    /// Remove the caller's cart. A missing cart is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn clear(&self, identity: &Identity) -> Result<(), ServiceError> {
        self.carts.delete(&identity.user_id).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use emporium_core::{Email, ProductId, Role, UserId};
    use tokio::task::JoinSet;

    use super::*;
    use crate::db::{Collection, Filter, MemoryDocumentStore};

    fn identity(id: &str) -> Identity {
        Identity {
            user_id: UserId::new(id),
            email: Email::parse("a@x.com").unwrap(),
            role: Role::User,
        }
    }

    fn items(quantity: i64) -> Vec<CartItem> {
        vec![CartItem {
            product_id: ProductId::new("p1"),
            quantity,
        }]
    }

    #[tokio::test]
    async fn test_missing_cart_is_empty_and_not_persisted() {
        let store = MemoryDocumentStore::new();
        let carts = CartService::new(&store);

        let cart = carts.get(&identity("u1")).await.unwrap();
        assert_eq!(cart, Cart::empty(UserId::new("u1")));
        assert_eq!(store.count(Collection::Carts, &Filter::all()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_is_idempotent_and_replaces() {
        let store = MemoryDocumentStore::new();
        let carts = CartService::new(&store);
        let user = identity("u1");

        carts.replace(&user, items(2)).await.unwrap();
        carts.replace(&user, items(2)).await.unwrap();
        assert_eq!(store.count(Collection::Carts, &Filter::all()).await.unwrap(), 1);
        assert_eq!(carts.get(&user).await.unwrap().items, items(2));

        carts.replace(&user, items(5)).await.unwrap();
        assert_eq!(carts.get(&user).await.unwrap().items, items(5));
    }

    #[tokio::test]
    async fn test_concurrent_first_writes_leave_one_cart() {
        let store = Arc::new(MemoryDocumentStore::new());
        let mut writers = JoinSet::new();
        for quantity in 1..=8 {
            let store = Arc::clone(&store);
            writers.spawn(async move {
                CartService::new(store.as_ref())
                    .replace(&identity("u1"), items(quantity))
                    .await
                    .unwrap();
            });
        }
        while let Some(joined) = writers.join_next().await {
            joined.unwrap();
        }

        assert_eq!(store.count(Collection::Carts, &Filter::all()).await.unwrap(), 1);

        let carts = CartService::new(store.as_ref());
        carts.clear(&identity("u1")).await.unwrap();
        assert!(carts.get(&identity("u1")).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_carts_are_scoped_per_user() {
        let store = MemoryDocumentStore::new();
        let carts = CartService::new(&store);

        carts.replace(&identity("u1"), items(1)).await.unwrap();
        assert!(carts.get(&identity("u2")).await.unwrap().items.is_empty());

        carts.clear(&identity("u1")).await.unwrap();
        carts.clear(&identity("u1")).await.unwrap();
        assert!(carts.get(&identity("u1")).await.unwrap().items.is_empty());
    }
}
