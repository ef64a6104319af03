//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Accounts, password login, session issuing
//! - `token` - JWT session tokens
//! - `catalog` - Products and categories
//! - `cart` - One replaceable cart per user
//! - `orders` - Order placement and status
//! - `settings` - Singleton site settings
//! - `seed` - Idempotent bootstrap data
//!
//! Services borrow the document store for the lifetime of a request and
//! never hold a lock across store calls.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod settings;
pub mod token;

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from the catalog, cart, order, settings, and seed services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
