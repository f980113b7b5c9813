//! Relational user store (SQLite)

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::{ApiError, Result};

/// A row in the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

pub struct UserStore {
    pool: Arc<SqlitePool>,
}

impl UserStore {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening users database at: {}", database_path);

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Uniqueness lives in the schema so inserts stay atomic under
        // concurrent requests.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert a user in a single statement; a duplicate username surfaces
    /// as a conflict via the unique constraint.
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash) VALUES (?1, ?2)
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&*self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ApiError::Conflict("Username already exists".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<Option<UserRecord>> {
        let row: Option<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash FROM users WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a user; returns whether a row matched.
    pub async fn delete_user(&self, username: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE username = ?1
            "#,
        )
        .bind(username)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> UserStore {
        let path = std::env::temp_dir().join(format!(
            "bazaar_users_test_{}.db",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        UserStore::new(path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let store = temp_store().await;

        store.create_user("alice", "hash-a").await.unwrap();

        let user = store.get_user("alice").await.unwrap().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_none() {
        let store = temp_store().await;
        assert!(store.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let store = temp_store().await;

        store.create_user("alice", "hash-a").await.unwrap();
        let err = store.create_user("alice", "hash-b").await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // The original record is untouched
        let user = store.get_user("alice").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let store = temp_store().await;

        store.create_user("alice", "hash-a").await.unwrap();
        store.create_user("bob", "hash-b").await.unwrap();

        assert!(store.delete_user("alice").await.unwrap());
        assert!(store.get_user("alice").await.unwrap().is_none());

        // A second delete reports no match; other rows are unaffected
        assert!(!store.delete_user("alice").await.unwrap());
        assert!(store.get_user("bob").await.unwrap().is_some());
    }
}
