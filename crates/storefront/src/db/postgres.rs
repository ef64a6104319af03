//! `PostgreSQL` document store.
//!
//! All collections share the `documents` table created by
//! `migrations/20260101000001_create_documents.sql`. Equality filters use
//! JSONB containment (`body @> $1`), substring filters use `ILIKE` with the
//! pattern characters escaped, and natural order is insertion order (`seq`).
//!
//! Queries are built at runtime with [`QueryBuilder`] since the filter shape
//! varies per call.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{
    Collection, Condition, Document, DocumentStore, Filter, FindOptions, RepositoryError, Sort,
    unique_key,
};

/// Document store backed by a `PostgreSQL` pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `%`, `_` and `\` so user input is matched literally by `ILIKE`.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Append `WHERE collection = .. AND <conditions>` to `builder`.
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, collection: Collection, filter: &Filter) {
    builder.push(" WHERE collection = ");
    builder.push_bind(collection.as_str());

    let equalities = filter.equalities();
    if !equalities.is_empty() {
        builder.push(" AND body @> ");
        builder.push_bind(Json(Value::Object(equalities)));
    }

    for condition in filter.conditions() {
        if let Condition::ContainsIgnoreCase { field, needle } = condition {
            builder.push(" AND body ->> ");
            builder.push_bind(*field);
            builder.push(" ILIKE ");
            builder.push_bind(escape_like(needle));
            builder.push(" ESCAPE '\\'");
        }
    }
}

/// `ORDER BY` for `sort`. Ties fall back to insertion order in the same
/// direction.
fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, sort: Option<Sort>) {
    builder.push(" ORDER BY ");
    match sort {
        Some(sort) if sort.descending => {
            builder.push("body ->> ");
            builder.push_bind(sort.field);
            builder.push(r#" COLLATE "C" DESC NULLS LAST, seq DESC"#);
        }
        Some(sort) => {
            builder.push("body ->> ");
            builder.push_bind(sort.field);
            builder.push(r#" COLLATE "C" ASC NULLS FIRST, seq"#);
        }
        None => {
            builder.push("seq");
        }
    }
}

/// Subquery selecting the `seq` of the first matching document.
fn push_first_match(
    builder: &mut QueryBuilder<'_, Postgres>,
    collection: Collection,
    filter: &Filter,
) {
    builder.push("(SELECT seq FROM documents");
    push_where(builder, collection, filter);
    builder.push(" ORDER BY seq LIMIT 1)");
}

/// Single-statement upsert keyed on the partial unique index over `field`.
///
/// The conflict target repeats the index expression and predicate literally
/// so `PostgreSQL` can infer the index.
fn push_keyed_upsert(
    builder: &mut QueryBuilder<'_, Postgres>,
    collection: Collection,
    field: &'static str,
    document: Document,
) {
    builder.push("INSERT INTO documents (collection, body) VALUES (");
    builder.push_bind(collection.as_str());
    builder.push(", ");
    builder.push_bind(Json(Value::Object(document)));
    builder.push(format_args!(
        ") ON CONFLICT ((body ->> '{field}')) WHERE collection = '{}' \
         DO UPDATE SET body = documents.body || EXCLUDED.body",
        collection.as_str()
    ));
}

/// Map unique-index violations to `Conflict`.
fn map_write_error(collection: Collection, error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = error
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!(
            "{} document violates a unique field",
            collection.as_str()
        ));
    }
    RepositoryError::Database(error)
}

fn into_documents(rows: Vec<Json<Value>>) -> Result<Vec<Document>, RepositoryError> {
    rows.into_iter()
        .map(|Json(value)| match value {
            Value::Object(map) => Ok(map),
            other => Err(RepositoryError::DataCorruption(format!(
                "stored body is not an object: {other}"
            ))),
        })
        .collect()
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, RepositoryError> {
        let found = self.find(collection, filter, FindOptions::limit(1)).await?;
        Ok(found.into_iter().next())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: FindOptions,
    ) -> Result<Vec<Document>, RepositoryError> {
        let mut builder = QueryBuilder::new("SELECT body FROM documents");
        push_where(&mut builder, collection, filter);

        push_order_by(&mut builder, options.sort);

        if let Some(limit) = options.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows: Vec<Json<Value>> = builder
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await?;
        into_documents(rows)
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2)")
            .bind(collection.as_str())
            .bind(Json(Value::Object(document)))
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(collection, e))?;
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<(), RepositoryError> {
        if documents.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::new("INSERT INTO documents (collection, body) ");
        builder.push_values(documents, |mut row, document| {
            row.push_bind(collection.as_str())
                .push_bind(Json(Value::Object(document)));
        });
        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(collection, e))?;
        Ok(())
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::new("UPDATE documents SET body = body || ");
        builder.push_bind(Json(Value::Object(changes)));
        builder.push(" WHERE seq = ");
        push_first_match(&mut builder, collection, filter);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(collection, e))?;
        Ok(result.rows_affected())
    }

    async fn upsert_one(
        &self,
        collection: Collection,
        filter: &Filter,
        changes: Document,
    ) -> Result<(), RepositoryError> {
        let mut document = filter.equalities();

        if let Some(field) = unique_key(collection, filter) {
            document.extend(changes);
            let mut builder = QueryBuilder::new("");
            push_keyed_upsert(&mut builder, collection, field, document);
            builder
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| map_write_error(collection, e))?;
            return Ok(());
        }

        let matched = self.update_one(collection, filter, changes.clone()).await?;
        if matched > 0 {
            return Ok(());
        }

        document.extend(changes.clone());
        match self.insert_one(collection, document).await {
            // Lost a race to a concurrent insert.
            Err(RepositoryError::Conflict(_)) => {
                self.update_one(collection, filter, changes).await?;
                Ok(())
            }
            other => other,
        }
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::new("DELETE FROM documents WHERE seq = ");
        push_first_match(&mut builder, collection, filter);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn count(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM documents");
        push_where(&mut builder, collection, filter);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative count: {count}")))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wraps_and_escapes() {
        assert_eq!(escape_like("mouse"), "%mouse%");
        assert_eq!(escape_like("50%_off"), "%50\\%\\_off%");
        assert_eq!(escape_like("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_where_clause_shape() {
        let filter = Filter::all()
            .eq("category", "electronics")
            .contains_ignore_case("name", "mouse");
        let mut builder = QueryBuilder::<Postgres>::new("SELECT body FROM documents");
        push_where(&mut builder, Collection::Products, &filter);

        assert_eq!(
            builder.sql(),
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 \
             AND body ->> $3 ILIKE $4 ESCAPE '\\'"
        );
    }

    #[test]
    fn test_descending_sort_breaks_ties_newest_first() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT body FROM documents");
        push_order_by(&mut builder, FindOptions::limit(1).newest_first("created_at").sort);
        assert_eq!(
            builder.sql(),
            r#"SELECT body FROM documents ORDER BY body ->> $1 COLLATE "C" DESC NULLS LAST, seq DESC"#
        );

        let mut builder = QueryBuilder::<Postgres>::new("SELECT body FROM documents");
        push_order_by(&mut builder, None);
        assert_eq!(builder.sql(), "SELECT body FROM documents ORDER BY seq");
    }

    #[test]
    fn test_keyed_upsert_targets_partial_index() {
        let mut document = Document::new();
        document.insert("user_id".to_owned(), Value::from("u1"));
        let mut builder = QueryBuilder::<Postgres>::new("");
        push_keyed_upsert(&mut builder, Collection::Carts, "user_id", document);

        assert_eq!(
            builder.sql(),
            "INSERT INTO documents (collection, body) VALUES ($1, $2) \
             ON CONFLICT ((body ->> 'user_id')) WHERE collection = 'carts' \
             DO UPDATE SET body = documents.body || EXCLUDED.body"
        );
    }

    #[test]
    fn test_where_clause_without_conditions() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM documents");
        push_where(&mut builder, Collection::Categories, &Filter::all());
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM documents WHERE collection = $1"
        );
    }
}
