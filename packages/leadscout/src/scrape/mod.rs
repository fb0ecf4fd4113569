//! Leadership scraper: locate a leadership page and parse name/title pairs.
//!
//! The scraper never raises for network failure. Per-candidate errors are
//! caught and logged; failure is signaled by an empty result so the caller
//! can fall back transparently.

mod heuristics;

pub use heuristics::LeaderExtractor;

use std::sync::Arc;
use std::time::Duration;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::fetch::PageFetcher;
use crate::types::Leader;

/// Heuristic tables and limits for one scraper instance.
///
/// The candidate-path list and title vocabulary are data, not code, so the
/// heuristics can be tuned or substituted in tests without touching logic.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Paths probed against the domain, in priority order. `/` means the
    /// site root.
    pub candidate_paths: Vec<String>,

    /// Controlled vocabulary of executive titles. A name/title pair whose
    /// title matches nothing here is rejected.
    pub title_vocabulary: Vec<String>,

    /// Result cap; earlier mentions win.
    pub max_leaders: usize,

    /// Timeout for each individual fetch.
    pub request_timeout: Duration,

    /// Wall-clock budget for a whole scrape attempt. On expiry the scrape
    /// gives up and returns what it has: nothing.
    pub total_budget: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            candidate_paths: [
                "/about",
                "/about-us",
                "/leadership",
                "/team",
                "/about/leadership",
                "/company/leadership",
                "/executives",
                "/management",
                "/",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            title_vocabulary: [
                "Chief Executive Officer",
                "Chief Operating Officer",
                "Chief Financial Officer",
                "Chief Technology Officer",
                "CEO",
                "COO",
                "CFO",
                "CTO",
                "CIO",
                "CMO",
                "CHRO",
                "CLO",
                "President",
                "Co-Founder",
                "Founder",
                "Executive Vice President",
                "Senior Vice President",
                "Vice President",
                "EVP",
                "SVP",
                "VP",
                "Managing Director",
                "General Manager",
                "Director",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_leaders: 10,
            request_timeout: Duration::from_secs(4),
            total_budget: Duration::from_secs(15),
        }
    }
}

/// Scrapes a company's site for executive name/title pairs.
pub struct LeadershipScraper {
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
    extractor: LeaderExtractor,
}

impl LeadershipScraper {
    /// Create a scraper with default heuristics.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_config(fetcher, ScrapeConfig::default())
    }

    /// Create a scraper with custom heuristics.
    pub fn with_config(fetcher: Arc<dyn PageFetcher>, config: ScrapeConfig) -> Self {
        let extractor = LeaderExtractor::new(&config.title_vocabulary);
        Self {
            fetcher,
            config,
            extractor,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Scrape leadership for a normalized domain.
    ///
    /// Tries each candidate path over https then http, stops at the first
    /// page that looks like a leadership page, and extracts from that page
    /// only. Returns an empty list on any failure.
    pub async fn scrape(&self, domain: &str) -> Vec<Leader> {
        info!(domain = %domain, fetcher = self.fetcher.name(), "scrape starting");

        let leaders =
            match tokio::time::timeout(self.config.total_budget, self.scrape_inner(domain)).await {
                Ok(leaders) => leaders,
                Err(_) => {
                    warn!(
                        domain = %domain,
                        budget_secs = self.config.total_budget.as_secs(),
                        "scrape budget exhausted"
                    );
                    Vec::new()
                }
            };

        info!(domain = %domain, leaders_found = leaders.len(), "scrape completed");
        leaders
    }

    async fn scrape_inner(&self, domain: &str) -> Vec<Leader> {
        for path in &self.config.candidate_paths {
            for scheme in ["https", "http"] {
                let url = if path == "/" {
                    format!("{}://{}/", scheme, domain)
                } else {
                    format!("{}://{}{}", scheme, domain, path)
                };

                let page = match self.fetcher.fetch(&url).await {
                    Ok(page) => page,
                    Err(e) => {
                        debug!(url = %url, error = %e, "candidate fetch failed");
                        continue;
                    }
                };

                // First parseable page with leadership content wins; no
                // aggregation across pages. Scoped so the non-Send DOM is
                // dropped before the next await.
                let outcome = {
                    let document = Html::parse_document(&page.html);
                    if heuristics::has_leadership_content(&document) {
                        Some(
                            self.extractor
                                .extract(&document, &url, self.config.max_leaders),
                        )
                    } else {
                        None
                    }
                };

                match outcome {
                    Some(leaders) => {
                        debug!(url = %url, leaders = leaders.len(), "leadership page parsed");
                        return leaders;
                    }
                    None => {
                        debug!(url = %url, "page has no leadership content");
                        // The page was reachable; the same path over http
                        // would serve the same content.
                        break;
                    }
                }
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFetcher;

    fn team_page() -> &'static str {
        r#"<html><body>
            <h1>Our Leadership</h1>
            <div class="team-member"><h3>Tim Cook</h3><p class="title">CEO</p></div>
            <div class="team-member"><h3>Luca Maestri</h3><p class="title">CFO</p></div>
        </body></html>"#
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let fetcher = MockFetcher::new()
            .with_page("https://example.com/about", team_page())
            .with_page(
                "https://example.com/leadership",
                r#"<html><body><h1>Leadership</h1>
                   <div class="team-member"><h3>Jane Doe</h3><p class="title">COO</p></div>
                   </body></html>"#,
            );

        let scraper = LeadershipScraper::new(Arc::new(fetcher.clone()));
        let leaders = scraper.scrape("example.com").await;

        // Only /about is parsed; /leadership is never aggregated in.
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].name, "Tim Cook");
        assert!(!fetcher
            .calls()
            .contains(&"https://example.com/leadership".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_domain_yields_empty() {
        let scraper = LeadershipScraper::new(Arc::new(MockFetcher::new()));
        let leaders = scraper.scrape("unreachable.example").await;
        assert!(leaders.is_empty());
    }

    #[tokio::test]
    async fn test_http_tried_after_https() {
        let fetcher = MockFetcher::new().with_page("http://example.com/about", team_page());

        let scraper = LeadershipScraper::new(Arc::new(fetcher.clone()));
        let leaders = scraper.scrape("example.com").await;

        assert_eq!(leaders.len(), 2);
        let calls = fetcher.calls();
        let https_pos = calls
            .iter()
            .position(|u| u == "https://example.com/about")
            .unwrap();
        let http_pos = calls
            .iter()
            .position(|u| u == "http://example.com/about")
            .unwrap();
        assert!(https_pos < http_pos);
    }

    #[tokio::test]
    async fn test_page_without_indicators_is_skipped() {
        let fetcher = MockFetcher::new()
            .with_page(
                "https://example.com/about",
                "<html><body><p>Buy our widgets today</p></body></html>",
            )
            .with_page("https://example.com/leadership", team_page());

        let scraper = LeadershipScraper::new(Arc::new(fetcher));
        let leaders = scraper.scrape("example.com").await;

        assert_eq!(leaders.len(), 2);
        assert_eq!(
            leaders[0].source_url.as_deref(),
            Some("https://example.com/leadership")
        );
    }

    #[tokio::test]
    async fn test_budget_expiry_yields_empty() {
        let fetcher = MockFetcher::new()
            .with_page("https://example.com/about", team_page())
            .with_delay(Duration::from_millis(50));

        let config = ScrapeConfig {
            total_budget: Duration::from_millis(5),
            ..ScrapeConfig::default()
        };
        let scraper = LeadershipScraper::with_config(Arc::new(fetcher), config);
        let leaders = scraper.scrape("example.com").await;

        assert!(leaders.is_empty());
    }

    #[tokio::test]
    async fn test_source_url_attached() {
        let fetcher = MockFetcher::new().with_page("https://example.com/about", team_page());
        let scraper = LeadershipScraper::new(Arc::new(fetcher));

        let leaders = scraper.scrape("example.com").await;
        assert!(leaders
            .iter()
            .all(|l| l.source_url.as_deref() == Some("https://example.com/about")));
    }
}
