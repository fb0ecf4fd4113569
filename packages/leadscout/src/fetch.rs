//! Page fetching seam for the scraper.
//!
//! `PageFetcher` abstracts over HTTP so the extraction heuristics can be
//! tested against canned pages. `HttpFetcher` is the production
//! implementation; `MockFetcher` lives in [`crate::testing`].

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};

/// Raw HTML fetched from one candidate URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the page was requested from
    pub url: String,

    /// Raw response body
    pub html: String,
}

impl FetchedPage {
    /// Create a fetched page.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Fetches a single page by URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL, returning the raw HTML on a 2xx response.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Fetcher name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// HTTP fetcher using reqwest.
///
/// Uses a browser-like User-Agent and Accept headers to avoid trivial bot
/// rejection; sites that require script execution or stronger anti-bot
/// measures simply yield no usable page.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default per-request timeout.
    pub fn new() -> FetchResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = reqwest::header::HeaderMap::new();
        if let Ok(accept) =
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".parse()
        {
            headers.insert(reqwest::header::ACCEPT, accept);
        }
        if let Ok(lang) = "en-US,en;q=0.5".parse() {
            headers.insert(reqwest::header::ACCEPT_LANGUAGE, lang);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        tracing::debug!(url = %url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http(Box::new(e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http(Box::new(e))
            }
        })?;

        Ok(FetchedPage::new(url, html))
    }

    fn name(&self) -> &str {
        "http"
    }
}
