//! Extraction orchestrator: store -> scrape -> fallback, in that order.
//!
//! Prefers the freshest real data the system can get without blocking the
//! user-visible flow: a stored snapshot beats a re-scrape, a scrape beats
//! curated data, and an empty result is still a success.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::directory::FallbackDirectory;
use crate::domain::{normalize_domain, validate_domain};
use crate::scrape::LeadershipScraper;
use crate::store::{LeaderStore, StoredCompany};
use crate::types::{AnalysisReport, DataSource};

/// Staleness policy for stored snapshots.
///
/// `max_age: None` means a stored record wins unconditionally. The original
/// product behavior had no invalidation, so that is the default; operators
/// who want re-scrapes set an age limit instead of a code change.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachePolicy {
    /// Snapshots older than this count as misses.
    pub max_age: Option<Duration>,
}

impl CachePolicy {
    /// Expire snapshots after `days` days.
    pub fn max_age_days(days: i64) -> Self {
        Self {
            max_age: Some(Duration::days(days)),
        }
    }

    fn is_fresh(&self, record: &StoredCompany) -> bool {
        match self.max_age {
            Some(max_age) => Utc::now() - record.updated_at <= max_age,
            None => true,
        }
    }
}

/// Sequences the data tiers and tags results with their provenance.
pub struct CompanyAnalyzer {
    scraper: LeadershipScraper,
    directory: FallbackDirectory,
    store: Option<Arc<dyn LeaderStore>>,
    cache_policy: CachePolicy,
}

impl CompanyAnalyzer {
    /// Create an analyzer with no persistence tier.
    pub fn new(scraper: LeadershipScraper, directory: FallbackDirectory) -> Self {
        Self {
            scraper,
            directory,
            store: None,
            cache_policy: CachePolicy::default(),
        }
    }

    /// Attach a persistence/cache gateway.
    pub fn with_store(mut self, store: Arc<dyn LeaderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the staleness policy.
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// Analyze free-text input into a leader report.
    ///
    /// The only error that escapes is `InvalidInput`; every downstream
    /// failure degrades to the next tier, and an empty result tagged
    /// `scraped` is the valid terminal outcome.
    pub async fn analyze(&self, raw_input: &str) -> crate::error::Result<AnalysisReport> {
        let domain = normalize_domain(raw_input)?;
        validate_domain(&domain)?;

        // Tier 1: stored snapshot.
        if let Some(record) = self.stored_record(&domain).await {
            let tag = self
                .store
                .as_ref()
                .map(|s| s.source_tag())
                .unwrap_or(DataSource::Database);
            info!(domain = %domain, leaders = record.leaders.len(), source = %tag, "served from store");
            return Ok(AnalysisReport::new(domain, record.leaders, tag));
        }

        // Tier 2: live scrape.
        let scraped = self.scraper.scrape(&domain).await;
        if !scraped.is_empty() {
            self.persist_snapshot(&domain, &scraped);
            info!(domain = %domain, leaders = scraped.len(), "served from live scrape");
            return Ok(AnalysisReport::new(domain, scraped, DataSource::Scraped));
        }

        // Tier 3: curated fallback.
        let curated = self.directory.lookup(&domain);
        if !curated.is_empty() {
            info!(domain = %domain, leaders = curated.len(), "served from fallback directory");
            return Ok(AnalysisReport::new(domain, curated, DataSource::Fallback));
        }

        info!(domain = %domain, "no leaders from any tier");
        Ok(AnalysisReport::empty(domain))
    }

    /// Fresh, non-empty stored record, or None. Store failures are treated
    /// as misses.
    async fn stored_record(&self, domain: &str) -> Option<StoredCompany> {
        let store = self.store.as_ref()?;

        match store.get(domain).await {
            Ok(Some(record)) if record.leaders.is_empty() => {
                debug!(domain = %domain, "stored record has no leaders, treating as miss");
                None
            }
            Ok(Some(record)) if !self.cache_policy.is_fresh(&record) => {
                debug!(domain = %domain, updated_at = %record.updated_at, "stored record is stale");
                None
            }
            Ok(record) => record,
            Err(e) => {
                warn!(domain = %domain, error = %e, "store lookup failed, treating as miss");
                None
            }
        }
    }

    /// Persist a scraped snapshot without blocking the response. Failures
    /// are logged and dropped.
    fn persist_snapshot(&self, domain: &str, leaders: &[crate::types::Leader]) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let store = Arc::clone(store);
        let domain = domain.to_string();
        let leaders = leaders.to_vec();

        tokio::spawn(async move {
            if let Err(e) = store.put(&domain, &leaders).await {
                warn!(domain = %domain, error = %e, "failed to persist snapshot");
            }
        });
    }
}
