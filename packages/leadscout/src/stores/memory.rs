//! In-memory store for testing and as a process-local cache tier.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreResult;
use crate::store::{LeaderStore, StoredCompany};
use crate::types::{DataSource, Leader};

/// In-memory leader store. Data is lost on restart; results served from it
/// are tagged `cache`.
#[derive(Default)]
pub struct MemoryStore {
    companies: RwLock<HashMap<String, StoredCompany>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored companies.
    pub fn company_count(&self) -> usize {
        self.companies.read().unwrap().len()
    }

    /// Drop all stored data.
    pub fn clear(&self) {
        self.companies.write().unwrap().clear();
    }

    /// Backdate a stored snapshot (staleness tests).
    pub fn set_updated_at(&self, domain: &str, updated_at: chrono::DateTime<Utc>) {
        if let Some(record) = self.companies.write().unwrap().get_mut(domain) {
            record.updated_at = updated_at;
        }
    }
}

#[async_trait]
impl LeaderStore for MemoryStore {
    async fn get(&self, domain: &str) -> StoreResult<Option<StoredCompany>> {
        Ok(self.companies.read().unwrap().get(domain).cloned())
    }

    async fn put(&self, domain: &str, leaders: &[Leader]) -> StoreResult<()> {
        self.companies.write().unwrap().insert(
            domain.to_string(),
            StoredCompany {
                domain: domain.to_string(),
                leaders: leaders.to_vec(),
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn source_tag(&self) -> DataSource {
        DataSource::Cache
    }
}
