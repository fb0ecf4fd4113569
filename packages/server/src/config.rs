use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional: without it the server runs with no persistence tier
    pub database_url: Option<String>,
    pub port: u16,
    /// Optional: without it /search-interviews returns empty mappings
    pub youtube_api_key: Option<String>,
    pub allowed_origins: Vec<String>,
    pub scrape_request_timeout: Duration,
    pub scrape_total_budget: Duration,
    pub scrape_max_leaders: usize,
    /// Stored snapshots older than this are re-scraped; None = cache wins
    pub cache_max_age_days: Option<i64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            scrape_request_timeout: Duration::from_secs(
                parse_optional("SCRAPE_REQUEST_TIMEOUT_SECS")?.unwrap_or(4),
            ),
            scrape_total_budget: Duration::from_secs(
                parse_optional("SCRAPE_TOTAL_BUDGET_SECS")?.unwrap_or(15),
            ),
            scrape_max_leaders: parse_optional("SCRAPE_MAX_LEADERS")?.unwrap_or(10) as usize,
            cache_max_age_days: parse_optional("CACHE_MAX_AGE_DAYS")?.map(|v| v as i64),
        })
    }
}

fn parse_optional(var: &str) -> Result<Option<u64>> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a valid number", var)),
        Err(_) => Ok(None),
    }
}
