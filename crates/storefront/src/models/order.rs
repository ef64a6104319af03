//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use emporium_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::timestamp;

/// A line in an order, snapshotted at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub price: Price,
}

/// What a customer submits at checkout. Stored verbatim; the total is
/// trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
    pub total: Price,
    /// Free-form shipping address.
    pub address: Map<String, Value>,
    pub payment_method: String,
}

/// A placed order. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: NewOrder,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Place `details` for `user_id` with a fresh ID and pending status.
    #[must_use]
    pub fn new(user_id: UserId, details: NewOrder) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            details,
            status: OrderStatus::default(),
            created_at: timestamp::now(),
        }
    }
}
