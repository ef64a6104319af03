//! In-memory document store.
//!
//! Collections are insertion-ordered vectors behind a single async lock.
//! Used by the integration tests and selectable with `EMPORIUM_STORE=memory`
//! for local runs; nothing survives a restart.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{
    Collection, Document, DocumentStore, Filter, FindOptions, RepositoryError, UNIQUE_FIELDS,
};

/// Document store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Check the unique fields of `collection` against the documents already stored.
fn check_unique(
    collection: Collection,
    existing: &[Document],
    candidate: &Document,
) -> Result<(), RepositoryError> {
    for (unique_collection, field) in UNIQUE_FIELDS {
        if *unique_collection != collection {
            continue;
        }
        let Some(value) = candidate.get(*field) else {
            continue;
        };
        if existing.iter().any(|doc| doc.get(*field) == Some(value)) {
            return Err(RepositoryError::Conflict(format!(
                "{} with this {field} already exists",
                collection.as_str()
            )));
        }
    }
    Ok(())
}

/// Ordering used for sorted finds. Strings and numbers compare naturally,
/// missing or mixed values compare equal so the sort stays stable.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<Document>, RepositoryError> {
        let collections = self.collections.read().await;
        let mut found: Vec<Document> = collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(collections);

        if let Some(sort) = options.sort {
            // Ties keep insertion order in the sort direction.
            if sort.descending {
                found.reverse();
            }
            found.sort_by(|a, b| {
                let ordering = compare_values(a.get(sort.field), b.get(sort.field));
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        if let Some(limit) = options.limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), RepositoryError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        check_unique(collection, docs, &document)?;
        docs.push(document);
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), RepositoryError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        for document in documents {
            check_unique(collection, docs, &document)?;
            docs.push(document);
        }
        Ok(())
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<u64, RepositoryError> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter.matches(doc)))
        else {
            return Ok(0);
        };
        doc.extend(changes);
        Ok(1)
    }

    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<(), RepositoryError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        if let Some(doc) = docs.iter_mut().find(|doc| filter.matches(doc)) {
            doc.extend(changes);
            return Ok(());
        }

        let mut document = filter.equalities();
        document.extend(changes);
        check_unique(collection, docs, &document)?;
        docs.push(document);
        Ok(())
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, RepositoryError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, RepositoryError> {
        let collections = self.collections.read().await;
        let count = collections
            .get(&collection)
            .map_or(0, |docs| docs.iter().filter(|doc| filter.matches(doc)).count());
        Ok(count as u64)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
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

    #[tokio::test]
    async fn test_find_preserves_insertion_order_and_limit() {
        let store = MemoryDocumentStore::new();
        for i in 0..5 {
            store
                .insert_one(Collection::Products, doc(json!({"n": i})))
                .await
                .unwrap();
        }

        let found = store
            .find(Collection::Products, &Filter::all(), FindOptions::limit(3))
            .await
            .unwrap();
        let ns: Vec<_> = found.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_find_sorted_descending() {
        let store = MemoryDocumentStore::new();
        for ts in ["2026-01-02", "2026-01-03", "2026-01-01"] {
            store
                .insert_one(Collection::Orders, doc(json!({"created_at": ts})))
                .await
                .unwrap();
        }

        let found = store
            .find(
                Collection::Orders,
                &Filter::all(),
                FindOptions::limit(10).newest_first("created_at"),
            )
            .await
            .unwrap();
        let order: Vec<_> = found.iter().map(|d| d["created_at"].clone()).collect();
        assert_eq!(
            order,
            vec![json!("2026-01-03"), json!("2026-01-02"), json!("2026-01-01")]
        );
    }

    #[tokio::test]
    async fn test_descending_ties_are_newest_inserted_first() {
        let store = MemoryDocumentStore::new();
        for id in ["o1", "o2", "o3"] {
            store
                .insert_one(
                    Collection::Orders,
                    doc(json!({"id": id, "created_at": "2026-01-01"})),
                )
                .await
                .unwrap();
        }

        let found = store
            .find(
                Collection::Orders,
                &Filter::all(),
                FindOptions::limit(10).newest_first("created_at"),
            )
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|d| d["id"].clone()).collect();
        assert_eq!(ids, vec![json!("o3"), json!("o2"), json!("o1")]);
    }

    #[tokio::test]
    async fn test_update_one_reports_matches() {
        let store = MemoryDocumentStore::new();
        store
            .insert_one(Collection::Orders, doc(json!({"id": "o1", "status": "pending"})))
            .await
            .unwrap();

        let matched = store
            .update_one(
                Collection::Orders,
                &Filter::all().eq("id", "o1"),
                doc(json!({"status": "shipped"})),
            )
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let missing = store
            .update_one(
                Collection::Orders,
                &Filter::all().eq("id", "nope"),
                doc(json!({"status": "shipped"})),
            )
            .await
            .unwrap();
        assert_eq!(missing, 0);

        let stored = store
            .find_one(Collection::Orders, &Filter::all().eq("id", "o1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored["status"], json!("shipped"));
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let store = MemoryDocumentStore::new();
        let filter = Filter::all().eq("user_id", "u1");

        store
            .upsert_one(Collection::Carts, &filter, doc(json!({"items": [1]})))
            .await
            .unwrap();
        store
            .upsert_one(Collection::Carts, &filter, doc(json!({"items": [2]})))
            .await
            .unwrap();

        assert_eq!(store.count(Collection::Carts, &Filter::all()).await.unwrap(), 1);
        let cart = store.find_one(Collection::Carts, &filter).await.unwrap().unwrap();
        assert_eq!(cart["user_id"], json!("u1"));
        assert_eq!(cart["items"], json!([2]));
    }

    #[tokio::test]
    async fn test_delete_one_removes_single_match() {
        let store = MemoryDocumentStore::new();
        store
            .insert_many(
                Collection::Categories,
                vec![doc(json!({"slug": "a"})), doc(json!({"slug": "a"}))],
            )
            .await
            .unwrap();

        let filter = Filter::all().eq("slug", "a");
        assert_eq!(store.delete_one(Collection::Categories, &filter).await.unwrap(), 1);
        assert_eq!(store.count(Collection::Categories, &filter).await.unwrap(), 1);
        assert_eq!(
            store
                .delete_one(Collection::Categories, &Filter::all().eq("slug", "b"))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_unique_email_is_enforced() {
        let store = MemoryDocumentStore::new();
        store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();

        let result = store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));

        store
            .insert_one(Collection::Users, doc(json!({"email": "A@x.com"})))
            .await
            .unwrap();
    }
}
