use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::{error, warn};

use super::{get_database_pool, run_migrations};
use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};
use crate::store::{Collection, RecordStore};

/// Document store over a single SQLite table. Documents are namespaced by
/// the configured database name and the collection; `seq` gives storage order.
#[derive(Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
    database_name: String,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool, database_name: impl Into<String>) -> Self {
        Self {
            pool,
            database_name: database_name.into(),
        }
    }

    /// Opens the pool and brings the schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = get_database_pool(&config.url, config.max_connections).await?;
        run_migrations(pool.clone()).await?;

        Ok(Self::new(pool, config.name.clone()))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub async fn count(&self, collection: Collection) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE database_name = ? AND collection = ?",
        )
        .bind(&self.database_name)
        .bind(collection.name())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(count)
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn insert(&self, collection: Collection, document: serde_json::Value) -> Result<()> {
        let body = serde_json::to_string(&document)?;

        sqlx::query(r#"
            INSERT INTO documents (database_name, collection, body, inserted_at)
            VALUES (?, ?, ?, ?)
        "#)
        .bind(&self.database_name)
        .bind(collection.name())
        .bind(&body)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(%collection, error = %e, "Failed to insert document");
            AppError::from(e)
        })?;

        Ok(())
    }

    async fn list(&self, collection: Collection, limit: usize) -> Result<Vec<serde_json::Value>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query(r#"
            SELECT seq, body
            FROM documents
            WHERE database_name = ? AND collection = ?
            ORDER BY seq ASC
            LIMIT ?
        "#)
        .bind(&self.database_name)
        .bind(collection.name())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(%collection, error = %e, "Failed to list documents");
            AppError::from(e)
        })?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let seq: i64 = row.try_get("seq").unwrap_or(0);
            let body: String = row.try_get("body").map_err(AppError::from)?;

            match serde_json::from_str(&body) {
                Ok(document) => documents.push(document),
                Err(e) => warn!(%collection, seq, error = %e, "Skipping unreadable document"),
            }
        }

        Ok(documents)
    }

    async fn health_check(&self) -> Result<()> {
        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                AppError::from(e)
            })?;

        if value == 1 {
            Ok(())
        } else {
            Err(AppError::StoreUnavailable("unexpected health check result".to_string()))
        }
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    async fn setup_test_db() -> (SqlitePool, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let database_url = format!("sqlite:{}", temp_file.path().display());

        let pool = get_database_pool(&database_url, 2).await.unwrap();
        run_migrations(pool.clone()).await.unwrap();
        (pool, temp_file)
    }

    #[tokio::test]
    async fn test_insert_and_list_preserves_order() {
        let (pool, _file) = setup_test_db().await;
        let store = SqliteRecordStore::new(pool, "timberguard");

        for i in 0..3 {
            store
                .insert(Collection::Quotes, json!({ "id": i.to_string(), "name": "A" }))
                .await
                .unwrap();
        }

        let documents = store.list(Collection::Quotes, 1000).await.unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
        assert_eq!(store.count(Collection::Quotes).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_collections_and_databases_are_isolated() {
        let (pool, _file) = setup_test_db().await;
        let primary = SqliteRecordStore::new(pool.clone(), "timberguard");
        let other = SqliteRecordStore::new(pool, "staging");

        primary.insert(Collection::Bookings, json!({"id": "b1"})).await.unwrap();

        assert!(primary.list(Collection::Quotes, 10).await.unwrap().is_empty());
        assert_eq!(primary.list(Collection::Bookings, 10).await.unwrap().len(), 1);
        assert!(other.list(Collection::Bookings, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let (pool, _file) = setup_test_db().await;
        let store = SqliteRecordStore::new(pool, "timberguard");

        for i in 0..5 {
            store.insert(Collection::Contacts, json!({ "n": i })).await.unwrap();
        }

        let documents = store.list(Collection::Contacts, 3).await.unwrap();
        assert_eq!(documents.len(), 3);
        assert_eq!(documents[2]["n"], 2);
    }

    #[tokio::test]
    async fn test_unreadable_documents_are_skipped() {
        let (pool, _file) = setup_test_db().await;
        let store = SqliteRecordStore::new(pool.clone(), "timberguard");

        store.insert(Collection::Quotes, json!({"id": "ok"})).await.unwrap();
        sqlx::query(
            "INSERT INTO documents (database_name, collection, body, inserted_at) VALUES (?, ?, ?, ?)",
        )
        .bind("timberguard")
        .bind("quotes")
        .bind("{not json")
        .bind(Utc::now().to_rfc3339())
        .execute(&pool)
        .await
        .unwrap();

        let documents = store.list(Collection::Quotes, 10).await.unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["id"], "ok");
    }

    #[tokio::test]
    async fn test_health_check_and_closed_pool() {
        let (pool, _file) = setup_test_db().await;
        let store = SqliteRecordStore::new(pool.clone(), "timberguard");
        assert!(store.health_check().await.is_ok());
        assert_eq!(store.kind(), "sqlite");

        pool.close().await;
        let result = store.insert(Collection::Quotes, json!({"id": "late"})).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_connect_runs_migrations_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite:{}", dir.path().join("leads.db").display()),
            name: "timberguard".to_string(),
            max_connections: 2,
        };

        let store = SqliteRecordStore::connect(&config).await.unwrap();
        store.insert(Collection::Quotes, json!({"id": "q1"})).await.unwrap();
        assert_eq!(store.database_name(), "timberguard");

        let reopened = SqliteRecordStore::connect(&config).await.unwrap();
        assert_eq!(reopened.count(Collection::Quotes).await.unwrap(), 1);
    }
}
