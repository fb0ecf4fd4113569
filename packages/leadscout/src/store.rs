//! Storage gateway for previously analyzed companies.
//!
//! Persistence is best-effort: every failure in an implementation is
//! reported as a `StoreError` and the analyzer degrades to a cache miss.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::types::{DataSource, Leader};

/// A previously stored company snapshot.
#[derive(Debug, Clone)]
pub struct StoredCompany {
    /// Canonical domain
    pub domain: String,

    /// Leaders in stored rank order
    pub leaders: Vec<Leader>,

    /// When the snapshot was last written (drives the staleness policy)
    pub updated_at: DateTime<Utc>,
}

/// Lookup/persist gateway keyed by domain.
#[async_trait]
pub trait LeaderStore: Send + Sync {
    /// Fetch the stored snapshot for a domain, if any.
    async fn get(&self, domain: &str) -> StoreResult<Option<StoredCompany>>;

    /// Store a leader snapshot for a domain, replacing any previous set.
    async fn put(&self, domain: &str, leaders: &[Leader]) -> StoreResult<()>;

    /// Provenance tag for results served from this store.
    fn source_tag(&self) -> DataSource {
        DataSource::Database
    }
}
