//! Product document store (SQLite-backed collection)
//!
//! Documents are stored verbatim as JSON in a schema-less collection keyed
//! by store-generated UUID strings, in a database separate from the user
//! store.

use std::sync::Arc;

use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::Result;

pub struct ProductStore {
    pool: Arc<SqlitePool>,
}

impl ProductStore {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening products database at: {}", database_path);

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                doc TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Insert a document and return its generated identifier.
    pub async fn insert(&self, doc: &Value) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO products (id, doc) VALUES (?1, ?2)
            "#,
        )
        .bind(&id)
        .bind(serde_json::to_string(doc)?)
        .execute(&*self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch a document by identifier, with the identifier merged into the
    /// returned object.
    ///
    /// Identifiers are plain strings, so lookup is raw string equality; an
    /// unknown or malformed id is a miss, never an error.
    pub async fn find(&self, id: &str) -> Result<Option<Value>> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT doc FROM products WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some((doc,)) => {
                let mut value: Value = serde_json::from_str(&doc)?;
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("id".to_string(), Value::String(id.to_string()));
                }
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Delete a document; returns whether one matched.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
