//! SQLite implementation of the CredentialStore.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Credential, CredentialRecord, InsertOutcome};
use crate::domain::ports::CredentialStore;

#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<CredentialRecord>> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT * FROM credentials WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn find_matching(&self, credential: &Credential) -> DomainResult<Option<CredentialRecord>> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT * FROM credentials WHERE username = ? AND secret = ?"
        )
        .bind(&credential.username)
        .bind(&credential.secret)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn insert_if_absent(&self, credential: &Credential) -> DomainResult<InsertOutcome> {
        // The unique index arbitrates concurrent inserts; DO NOTHING turns
        // the losing insert into a zero-row write instead of an error.
        let result = sqlx::query(
            r#"INSERT INTO credentials (username, secret, created_at)
               VALUES (?, ?, ?)
               ON CONFLICT(username) DO NOTHING"#
        )
        .bind(&credential.username)
        .bind(&credential.secret)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Inserted)
        }
    }

    async fn list(&self, limit: usize) -> DomainResult<Vec<CredentialRecord>> {
        let rows: Vec<CredentialRow> = sqlx::query_as(
            "SELECT * FROM credentials ORDER BY id LIMIT ?"
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn truncate_all(&self) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM credentials").execute(&mut *tx).await?;
        // Reset AUTOINCREMENT numbering so reloaded rows start from id 1.
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'credentials'")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    username: String,
    secret: String,
    created_at: String,
}

impl TryFrom<CredentialRow> for CredentialRecord {
    type Error = DomainError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let created_at = super::parse_datetime(&row.created_at)?;

        Ok(CredentialRecord {
            id: row.id,
            username: row.username,
            secret: row.secret,
            created_at,
        })
    }
}
