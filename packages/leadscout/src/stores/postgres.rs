//! PostgreSQL-backed leader store.
//!
//! Schema is owned by the consuming application (companies + leaders with a
//! cascade FK); this store only reads and writes it. Leader sets are
//! idempotent snapshots: a put replaces the company's whole set, so
//! concurrent writes for one domain race benignly (last write wins).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use crate::domain::company_name_from_domain;
use crate::error::{StoreError, StoreResult};
use crate::store::{LeaderStore, StoredCompany};
use crate::types::{DataSource, Leader};

/// PostgreSQL leader store.
pub struct PostgresStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct CompanyRow {
    id: Uuid,
    domain: String,
    updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct LeaderRow {
    name: String,
    title: String,
    source_url: Option<String>,
}

impl PostgresStore {
    /// Connect with a new pool.
    pub async fn new(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(db_error)?;
        Ok(Self::from_pool(pool))
    }

    /// Reuse an existing connection pool (avoids duplicate connections when
    /// the application already has one).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LeaderStore for PostgresStore {
    async fn get(&self, domain: &str) -> StoreResult<Option<StoredCompany>> {
        let company: Option<CompanyRow> =
            sqlx::query_as("SELECT id, domain, updated_at FROM companies WHERE domain = $1")
                .bind(domain)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        let Some(company) = company else {
            return Ok(None);
        };

        let rows: Vec<LeaderRow> = sqlx::query_as(
            "SELECT name, title, source_url FROM leaders \
             WHERE company_id = $1 ORDER BY position, created_at",
        )
        .bind(company.id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        debug!(domain = %domain, leaders = rows.len(), "loaded stored company");

        let leaders = rows
            .into_iter()
            .map(|row| Leader {
                name: row.name,
                title: row.title,
                source_url: row.source_url,
            })
            .collect();

        Ok(Some(StoredCompany {
            domain: company.domain,
            leaders,
            updated_at: company.updated_at,
        }))
    }

    async fn put(&self, domain: &str, leaders: &[Leader]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let company_id: Uuid = sqlx::query_scalar(
            "INSERT INTO companies (id, domain, name) VALUES ($1, $2, $3) \
             ON CONFLICT (domain) DO UPDATE SET updated_at = now() \
             RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(domain)
        .bind(company_name_from_domain(domain))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        // Replace the snapshot wholesale rather than merging.
        sqlx::query("DELETE FROM leaders WHERE company_id = $1")
            .bind(company_id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        for (position, leader) in leaders.iter().enumerate() {
            sqlx::query(
                "INSERT INTO leaders (id, company_id, name, title, source_url, position) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(Uuid::new_v4())
            .bind(company_id)
            .bind(&leader.name)
            .bind(&leader.title)
            .bind(&leader.source_url)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;

        debug!(domain = %domain, leaders = leaders.len(), "stored company snapshot");
        Ok(())
    }

    fn source_tag(&self) -> DataSource {
        DataSource::Database
    }
}

fn db_error(e: sqlx::Error) -> StoreError {
    StoreError::Database(Box::new(e))
}
