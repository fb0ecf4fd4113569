//! Mock implementations for testing.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult, StoreError, StoreResult};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::store::{LeaderStore, StoredCompany};
use crate::types::{DataSource, Leader};

/// Page fetcher with canned responses and recorded calls.
///
/// URLs without a configured page answer 404, so an unconfigured mock
/// behaves like an unreachable domain.
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), html.to_string());
        self
    }

    /// Delay every fetch (budget tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of fetches issued.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            calls: Arc::clone(&self.calls),
            delay: self.delay,
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let page = self.pages.read().unwrap().get(url).cloned();
        match page {
            Some(html) => Ok(FetchedPage::new(url, html)),
            None => Err(FetchError::Status {
                code: 404,
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Leader store whose every operation fails (degradation tests).
#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    /// Create a failing store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeaderStore for FailingStore {
    async fn get(&self, _domain: &str) -> StoreResult<Option<StoredCompany>> {
        Err(StoreError::Database("store unreachable".into()))
    }

    async fn put(&self, _domain: &str, _leaders: &[Leader]) -> StoreResult<()> {
        Err(StoreError::Database("store unreachable".into()))
    }

    fn source_tag(&self) -> DataSource {
        DataSource::Database
    }
}
