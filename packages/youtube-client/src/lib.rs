//! Pure YouTube Data API v3 client
//!
//! A clean, minimal client for video search with no domain-specific logic.
//! Supports the `search.list` and `videos.list` endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use youtube_client::YouTubeClient;
//!
//! let client = YouTubeClient::from_env()?;
//!
//! // Search recent videos, enriched with statistics and duration
//! let videos = client
//!     .search_videos("Tim Cook interview", 8, Some(six_months_ago))
//!     .await?;
//!
//! for video in videos {
//!     println!("{} ({})", video.title, video.channel_title);
//! }
//! ```

pub mod duration;
pub mod error;
pub mod types;

pub use duration::{format_duration, parse_iso8601_duration};
pub use error::{Result, YouTubeError};
pub use types::*;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use tracing::{debug, warn};

/// Pure YouTube Data API client.
#[derive(Clone)]
pub struct YouTubeClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
        }
    }

    /// Create from environment variable `YOUTUBE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("YOUTUBE_API_KEY")
            .map_err(|_| YouTubeError::Config("YOUTUBE_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Search for videos matching a query.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        published_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<SearchItem>> {
        let url = format!("{}/search", self.base_url);
        let max_results = max_results.to_string();

        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", query.to_string()),
            ("type", "video".to_string()),
            ("maxResults", max_results),
            ("order", "relevance".to_string()),
            ("relevanceLanguage", "en".to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(after) = published_after {
            params.push((
                "publishedAfter",
                after.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        debug!(query = %query, "YouTube search");
        let response: SearchListResponse = self.get_json(&url, &params).await?;
        Ok(response.items)
    }

    /// Fetch statistics and duration for specific video ids.
    pub async fn videos(&self, ids: &[String]) -> Result<Vec<VideoResource>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/videos", self.base_url);
        let params = vec![
            ("part", "snippet,statistics,contentDetails".to_string()),
            ("id", ids.join(",")),
            ("key", self.api_key.clone()),
        ];

        let response: VideoListResponse = self.get_json(&url, &params).await?;
        Ok(response.items)
    }

    /// Search and enrich in one call: search for the query, then resolve
    /// statistics and durations for the hits.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
        published_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<VideoInfo>> {
        let hits = self.search(query, max_results, published_after).await?;
        let ids: Vec<String> = hits
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let resources = self.videos(&ids).await?;
        Ok(resources.into_iter().map(VideoInfo::from_resource).collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| YouTubeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "YouTube API error");
            return Err(YouTubeError::Api(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| YouTubeError::Parse(e.to_string()))
    }
}
