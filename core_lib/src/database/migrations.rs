//! Schema versioning for the SQLite document store

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::error::{AppError, Result};

struct Migration {
    version: i64,
    name: &'static str,
    statements: &'static [&'static str],
}

/// Applied in order; a version is never edited once released.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_documents_table",
    statements: &[
        r#"
        CREATE TABLE documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            database_name TEXT NOT NULL,
            collection TEXT NOT NULL,
            body TEXT NOT NULL,
            inserted_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX idx_documents_collection ON documents(database_name, collection, seq)",
    ],
}];

pub struct MigrationManager {
    pool: SqlitePool,
}

impl MigrationManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        self.ensure_history_table().await?;

        let current = self.current_version().await?;
        let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();

        if pending.is_empty() {
            info!(version = current, "Document schema is up to date");
            return Ok(());
        }

        for migration in &pending {
            info!(version = migration.version, name = migration.name, "Applying migration");
            self.apply(migration).await?;
        }

        info!(applied = pending.len(), "Document schema migrated");
        Ok(())
    }

    async fn ensure_history_table(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn current_version(&self) -> Result<i64> {
        let version: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM _migrations")
            .fetch_one(&self.pool)
            .await?;

        Ok(version.unwrap_or(0))
    }

    async fn apply(&self, migration: &Migration) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for statement in migration.statements {
            if let Err(e) = sqlx::query(statement).execute(&mut *tx).await {
                error!(version = migration.version, error = %e, "Migration statement failed");
                return Err(AppError::from(e));
            }
        }

        sqlx::query("INSERT INTO _migrations (version, name, applied_at) VALUES (?, ?, ?)")
            .bind(migration.version)
            .bind(migration.name)
            .bind(Utc::now().to_rfc3339())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

pub async fn run_migrations(pool: SqlitePool) -> Result<()> {
    MigrationManager::new(pool).run_migrations().await
}
