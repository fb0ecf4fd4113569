//! Company leadership extraction library.
//!
//! Given a company domain, locate a leadership page on the company's site,
//! parse executive name/title pairs out of it, and degrade gracefully
//! through a stored snapshot and a curated fallback directory when live
//! extraction yields nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leadscout::{CompanyAnalyzer, FallbackDirectory, HttpFetcher, LeadershipScraper};
//!
//! let fetcher = Arc::new(HttpFetcher::new()?);
//! let scraper = LeadershipScraper::new(fetcher);
//! let analyzer = CompanyAnalyzer::new(scraper, FallbackDirectory::curated());
//!
//! let report = analyzer.analyze("https://www.apple.com/about").await?;
//! println!("{} via {}", report.domain, report.data_source);
//! ```
//!
//! # Modules
//!
//! - [`domain`] - input normalization and validation
//! - [`scrape`] - the leadership scraper and its heuristic tables
//! - [`directory`] - curated fallback data
//! - [`analyzer`] - tier orchestration and provenance tagging
//! - [`store`] / [`stores`] - persistence gateway and implementations
//! - [`testing`] - mock implementations for tests

pub mod analyzer;
pub mod directory;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod scrape;
pub mod store;
pub mod stores;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use analyzer::{CachePolicy, CompanyAnalyzer};
pub use directory::FallbackDirectory;
pub use domain::{company_name_from_domain, normalize_domain, validate_domain};
pub use error::{FetchError, LeadScoutError, Result, StoreError};
pub use fetch::{FetchedPage, HttpFetcher, PageFetcher};
pub use scrape::{LeaderExtractor, LeadershipScraper, ScrapeConfig};
pub use store::{LeaderStore, StoredCompany};
pub use stores::MemoryStore;
pub use types::{AnalysisReport, DataSource, Leader};

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;

// Re-export testing utilities
pub use testing::{FailingStore, MockFetcher};
