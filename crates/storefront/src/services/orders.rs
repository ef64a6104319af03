//! Order service: placement, history, and status changes.

use emporium_core::{OrderId, OrderStatus};

use super::ServiceError;
use super::cart::CartService;
use crate::db::DocumentStore;
use crate::db::orders::OrderRepository;
use crate::models::order::{NewOrder, Order};
use crate::services::token::Identity;

/// Maximum orders returned for one customer.
pub const MY_ORDERS_LIMIT: usize = 100;
/// Maximum orders returned to admins.
pub const ALL_ORDERS_LIMIT: usize = 1000;

/// Order operations.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
    carts: CartService<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            orders: OrderRepository::new(store),
            carts: CartService::new(store),
        }
    }

    /// Place an order for the caller and empty their cart.
    ///
    /// The two writes are not atomic: if clearing the cart fails the order
    /// is already stored.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn create(&self, identity: &Identity, details: NewOrder) -> Result<Order, ServiceError> {
        let order = Order::new(identity.user_id.clone(), details);
        self.orders.create(&order).await?;
        tracing::info!(order_id = %order.id, user_id = %identity.user_id, "Order placed");

        self.carts.clear(identity).await?;
        Ok(order)
    }

    /// The caller's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn list_mine(&self, identity: &Identity) -> Result<Vec<Order>, ServiceError> {
        Ok(self
            .orders
            .list_newest(Some(&identity.user_id), MY_ORDERS_LIMIT)
            .await?)
    }

    /// All orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.list_newest(None, ALL_ORDERS_LIMIT).await?)
    }

    /// Overwrite an order's status. Any string is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if no order has this ID.
    pub async fn update_status(&self, id: &OrderId, status: &OrderStatus) -> Result<(), ServiceError> {
        if !self.orders.set_status(id, status).await? {
            return Err(ServiceError::NotFound("Order"));
        }
        tracing::info!(order_id = %id, status = %status, "Order status updated");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use emporium_core::{Email, Price, ProductId, Role, UserId};
    use serde_json::Map;

    use super::*;
    use crate::db::MemoryDocumentStore;
    use crate::models::cart::CartItem;
    use crate::models::order::OrderItem;

    fn identity(id: &str) -> Identity {
        Identity {
            user_id: UserId::new(id),
            email: Email::parse("a@x.com").unwrap(),
            role: Role::User,
        }
    }

    fn new_order(cents: i64) -> NewOrder {
        NewOrder {
            items: vec![OrderItem {
                product_id: ProductId::new("p1"),
                product_name: "Mouse".to_owned(),
                quantity: 1,
                price: Price::from_cents(cents).unwrap(),
            }],
            total: Price::from_cents(cents).unwrap(),
            address: Map::new(),
            payment_method: "cod".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_clears_cart() {
        let store = MemoryDocumentStore::new();
        let user = identity("u1");
        let carts = CartService::new(&store);
        carts
            .replace(
                &user,
                vec![CartItem {
                    product_id: ProductId::new("p1"),
                    quantity: 1,
                }],
            )
            .await
            .unwrap();

        let orders = OrderService::new(&store);
        let order = orders.create(&user, new_order(3999)).await.unwrap();
        assert_eq!(order.status.as_str(), "pending");
        assert_eq!(order.user_id, user.user_id);
        assert!(carts.get(&user).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_lists_are_scoped_and_newest_first() {
        let store = MemoryDocumentStore::new();
        let orders = OrderService::new(&store);

        let first = orders.create(&identity("u1"), new_order(100)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = orders.create(&identity("u1"), new_order(200)).await.unwrap();
        orders.create(&identity("u2"), new_order(300)).await.unwrap();

        let mine = orders.list_mine(&identity("u1")).await.unwrap();
        let ids: Vec<_> = mine.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        assert_eq!(orders.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_status() {
        let store = MemoryDocumentStore::new();
        let orders = OrderService::new(&store);
        let order = orders.create(&identity("u1"), new_order(100)).await.unwrap();

        orders
            .update_status(&order.id, &OrderStatus::new("shipped"))
            .await
            .unwrap();
        let stored = orders.list_mine(&identity("u1")).await.unwrap();
        assert_eq!(stored[0].status.as_str(), "shipped");

        assert!(matches!(
            orders
                .update_status(&OrderId::new("missing"), &OrderStatus::new("x"))
                .await,
            Err(ServiceError::NotFound("Order"))
        ));
    }
}
