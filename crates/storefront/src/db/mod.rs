//! Document store access for the storefront.
//!
//! Every entity is persisted as a JSON document inside a named
//! [`Collection`]. The [`DocumentStore`] trait is the only seam between the
//! services and storage; two backends implement it:
//!
//! - [`PgDocumentStore`] - `PostgreSQL` (`documents` table, JSONB bodies)
//! - [`MemoryDocumentStore`] - in-process map, used by tests and local runs
//!
//! Typed repositories (`users`, `products`, ...) sit on top of the store and
//! convert between documents and models with serde.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p emporium-cli -- migrate
//! ```

pub mod carts;
pub mod categories;
pub mod memory;
pub mod orders;
pub mod postgres;
pub mod products;
pub mod settings;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Named collections of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Products,
    Categories,
    Carts,
    Orders,
    SiteSettings,
}

impl Collection {
    /// Name used as the storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Carts => "carts",
            Self::Orders => "orders",
            Self::SiteSettings => "site_settings",
        }
    }
}

/// Fields that must be unique within their collection.
///
/// Mirrors the partial unique indexes in the `documents` migration.
pub const UNIQUE_FIELDS: &[(Collection, &str)] =
    &[(Collection::Users, "email"), (Collection::Carts, "user_id")];

/// The unique field of `collection` that `filter` pins to one value, if any.
#[must_use]
pub fn unique_key(collection: Collection, filter: &Filter) -> Option<&'static str> {
    let equalities = filter.equalities();
    UNIQUE_FIELDS
        .iter()
        .find(|(unique_collection, field)| {
            *unique_collection == collection && equalities.contains_key(*field)
        })
        .map(|(_, field)| *field)
}

/// A single filter condition on a top-level document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals the value exactly.
    Eq { field: &'static str, value: Value },
    /// Field is a string containing `needle`, ignoring case. The needle is
    /// matched literally, never as a pattern.
    ContainsIgnoreCase { field: &'static str, needle: String },
}

/// Conjunction of [`Condition`]s. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Filter matching every document.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Add an exact-equality condition.
    #[must_use]
    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq {
            field,
            value: value.into(),
        });
        self
    }

    /// Add a case-insensitive literal substring condition.
    #[must_use]
    pub fn contains_ignore_case(mut self, field: &'static str, needle: impl Into<String>) -> Self {
        self.conditions.push(Condition::ContainsIgnoreCase {
            field,
            needle: needle.into(),
        });
        self
    }

    /// The conditions in this filter.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Equality conditions as a document, for containment queries and
    /// for seeding upserted documents.
    #[must_use]
    pub fn equalities(&self) -> Document {
        self.conditions
            .iter()
            .filter_map(|c| match c {
                Condition::Eq { field, value } => Some(((*field).to_owned(), value.clone())),
                Condition::ContainsIgnoreCase { .. } => None,
            })
            .collect()
    }

    /// Whether `document` satisfies every condition.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Eq { field, value } => document.get(*field) == Some(value),
            Condition::ContainsIgnoreCase { field, needle } => document
                .get(*field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle.to_lowercase())),
        })
    }
}

/// Sort order for [`DocumentStore::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub descending: bool,
}

/// Options for [`DocumentStore::find`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub sort: Option<Sort>,
    pub limit: Option<usize>,
}

impl FindOptions {
    /// Natural store order, capped at `limit` documents.
    #[must_use]
    pub const fn limit(limit: usize) -> Self {
        Self {
            sort: None,
            limit: Some(limit),
        }
    }

    /// Sort descending by `field`.
    #[must_use]
    pub const fn newest_first(mut self, field: &'static str) -> Self {
        self.sort = Some(Sort {
            field,
            descending: true,
        });
        self
    }
}

/// Storage backend for JSON documents.
///
/// Operations act on at most one collection and are individually atomic;
/// callers composing several operations get no transaction.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document (in store order) matching `filter`.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, RepositoryError>;

    /// Documents matching `filter`, optionally sorted and capped.
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<Document>, RepositoryError>;

    /// Insert one document.
    ///
    /// Returns [`RepositoryError::Conflict`] if a unique field is taken.
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), RepositoryError>;

    /// Insert several documents.
    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), RepositoryError>;

    /// Merge `changes` into the first document matching `filter`.
    ///
    /// Returns the number of matched documents (0 or 1).
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<u64, RepositoryError>;

    /// Merge `changes` into the first document matching `filter`, or insert
    /// a new document built from the filter's equalities plus `changes`.
    ///
    /// When the filter pins a field listed in [`UNIQUE_FIELDS`], concurrent
    /// upserts for the same value leave exactly one document.
    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<(), RepositoryError>;

    /// Delete the first document matching `filter`.
    ///
    /// Returns the number of deleted documents (0 or 1).
    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, RepositoryError>;

    /// Number of documents matching `filter`.
    async fn count(&self, collection: Collection, filter: &Filter)
    -> Result<u64, RepositoryError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Serialize a model into a document.
///
/// # Errors
///
/// Returns `RepositoryError::DataCorruption` if the value does not serialize
/// to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, RepositoryError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(RepositoryError::DataCorruption(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(RepositoryError::DataCorruption(format!(
            "failed to serialize document: {e}"
        ))),
    }
}

/// Deserialize a stored document into a model.
///
/// Unknown fields (including the storage-internal ones) are ignored.
///
/// # Errors
///
/// Returns `RepositoryError::DataCorruption` if the document does not match
/// the model.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, RepositoryError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid stored document: {e}")))
}

/// Deserialize a list of stored documents.
///
/// # Errors
///
/// Returns `RepositoryError::DataCorruption` on the first malformed document.
pub fn from_documents<T: DeserializeOwned>(
    documents: Vec<Document>,
) -> Result<Vec<T>, RepositoryError> {
    documents.into_iter().map(from_document).collect()
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_unique_key_requires_pinned_field() {
        assert_eq!(
            unique_key(Collection::Carts, &Filter::all().eq("user_id", "u1")),
            Some("user_id")
        );
        assert_eq!(unique_key(Collection::Carts, &Filter::all()), None);
        assert_eq!(
            unique_key(Collection::Orders, &Filter::all().eq("user_id", "u1")),
            None
        );
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&doc(json!({}))));
        assert!(Filter::all().matches(&doc(json!({"a": 1}))));
    }

    #[test]
    fn test_eq_and_contains_are_conjunctive() {
        let filter = Filter::all()
            .eq("category", "electronics")
            .contains_ignore_case("name", "MOUSE");

        assert!(filter.matches(&doc(json!({"category": "electronics", "name": "Wireless Mouse"}))));
        assert!(!filter.matches(&doc(json!({"category": "electronics", "name": "Monitor"}))));
        assert!(!filter.matches(&doc(json!({"category": "others", "name": "Gaming Mouse"}))));
    }

    #[test]
    fn test_contains_is_literal() {
        let filter = Filter::all().contains_ignore_case("name", "a.c");
        assert!(filter.matches(&doc(json!({"name": "xA.Cx"}))));
        assert!(!filter.matches(&doc(json!({"name": "abc"}))));
    }

    #[test]
    fn test_contains_requires_string_field() {
        let filter = Filter::all().contains_ignore_case("stock", "1");
        assert!(!filter.matches(&doc(json!({"stock": 10}))));
        assert!(!filter.matches(&doc(json!({}))));
    }

    #[test]
    fn test_equalities_skip_substring_conditions() {
        let filter = Filter::all()
            .eq("user_id", "u1")
            .contains_ignore_case("name", "x");
        assert_eq!(filter.equalities(), doc(json!({"user_id": "u1"})));
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(matches!(
            to_document(&42),
            Err(RepositoryError::DataCorruption(_))
        ));
        assert_eq!(
            to_document(&json!({"a": true})).unwrap(),
            doc(json!({"a": true}))
        );
    }
}
