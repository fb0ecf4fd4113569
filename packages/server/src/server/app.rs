//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use leadscout::{
    CachePolicy, CompanyAnalyzer, FallbackDirectory, HttpFetcher, LeadershipScraper,
    PostgresStore, ScrapeConfig,
};
use youtube_client::YouTubeClient;

use crate::config::Config;
use crate::kernel::{InterviewSearcher, NoopInterviewSearcher, YouTubeInterviewSearcher};
use crate::server::routes::{analyze_handler, health_handler, search_interviews_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Option<PgPool>,
    pub analyzer: Arc<CompanyAnalyzer>,
    pub interviews: Arc<dyn InterviewSearcher>,
}

/// Build the Axum application from configuration.
///
/// The pool is optional: without one the analyzer simply has no persistence
/// tier and health reports the database as not configured.
pub fn build_app(pool: Option<PgPool>, config: &Config) -> anyhow::Result<Router> {
    let scrape_config = ScrapeConfig {
        max_leaders: config.scrape_max_leaders,
        request_timeout: config.scrape_request_timeout,
        total_budget: config.scrape_total_budget,
        ..ScrapeConfig::default()
    };

    let fetcher = Arc::new(HttpFetcher::with_timeout(config.scrape_request_timeout)?);
    let scraper = LeadershipScraper::with_config(fetcher, scrape_config);

    let mut analyzer = CompanyAnalyzer::new(scraper, FallbackDirectory::curated());
    if let Some(pool) = &pool {
        analyzer = analyzer.with_store(Arc::new(PostgresStore::from_pool(pool.clone())));
    }
    if let Some(days) = config.cache_max_age_days {
        analyzer = analyzer.with_cache_policy(CachePolicy::max_age_days(days));
    }

    let interviews: Arc<dyn InterviewSearcher> = match &config.youtube_api_key {
        Some(key) if !key.is_empty() => {
            tracing::info!("Interview search enabled (YouTube)");
            Arc::new(YouTubeInterviewSearcher::new(YouTubeClient::new(
                key.clone(),
            )))
        }
        _ => {
            tracing::info!("Interview search disabled (no YOUTUBE_API_KEY)");
            Arc::new(NoopInterviewSearcher::new())
        }
    };

    let state = AppState {
        db_pool: pool,
        analyzer: Arc::new(analyzer),
        interviews,
    };

    Ok(build_router(state, &config.allowed_origins))
}

/// Build the router for an already-assembled state (used directly by tests).
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/search-interviews", post(search_interviews_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
