//! Shopping cart models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use emporium_core::{ProductId, UserId};

use super::timestamp;

/// A line in a cart. Product references and quantities are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A user's cart. At most one exists per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    /// Absent on the unsaved empty cart.
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    /// The view returned for a user without a stored cart.
    #[must_use]
    pub const fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            updated_at: None,
        }
    }
}
