//! Order status.

use serde::{Deserialize, Serialize};

/// Order status.
///
/// Statuses are free text set by administrators; there is no enforced
/// transition graph. New orders start as [`OrderStatus::PENDING`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Status assigned to newly placed orders.
    pub const PENDING: &'static str = "pending";

    /// Wrap a status string.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// The status as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self(Self::PENDING.to_owned())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default().as_str(), "pending");
    }

    #[test]
    fn test_accepts_any_text() {
        let status: OrderStatus = serde_json::from_str("\"out for delivery\"").unwrap();
        assert_eq!(status, OrderStatus::new("out for delivery"));
    }
}
