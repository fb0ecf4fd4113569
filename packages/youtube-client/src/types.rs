//! Wire types for the YouTube Data API v3.

use serde::{Deserialize, Serialize};

/// Response from the `search.list` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Option<Snippet>,
}

/// Resource id of a search result; only video hits carry `videoId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

/// Snippet shared by search and video resources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
}

/// Response from the `videos.list` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

/// One video resource with statistics and duration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<VideoContentDetails>,
}

/// View/like counters. The API serializes counters as strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
}

/// Duration and friends.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

/// Flattened video info assembled from search + videos responses.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: String,
    pub url: String,
    pub view_count: u64,
    pub duration_seconds: u64,
}

impl VideoInfo {
    /// Assemble from a `videos.list` resource.
    pub fn from_resource(resource: VideoResource) -> Self {
        let snippet = resource.snippet.unwrap_or_default();
        let view_count = resource
            .statistics
            .and_then(|s| s.view_count)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let duration_seconds = resource
            .content_details
            .and_then(|d| d.duration)
            .map(|d| crate::duration::parse_iso8601_duration(&d))
            .unwrap_or(0);

        Self {
            url: format!("https://www.youtube.com/watch?v={}", resource.id),
            video_id: resource.id,
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            published_at: snippet.published_at,
            view_count,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_decodes() {
        let json = r#"{
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "abc123"},
                    "snippet": {
                        "title": "Tim Cook interview",
                        "description": "A conversation",
                        "channelTitle": "CNBC",
                        "publishedAt": "2026-05-01T12:00:00Z"
                    }
                },
                {
                    "id": {"kind": "youtube#channel"}
                }
            ]
        }"#;

        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id.video_id.as_deref(), Some("abc123"));
        assert!(response.items[1].id.video_id.is_none());
        let snippet = response.items[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.channel_title, "CNBC");
    }

    #[test]
    fn test_video_response_decodes_and_flattens() {
        let json = r#"{
            "items": [
                {
                    "id": "abc123",
                    "snippet": {
                        "title": "Tim Cook interview",
                        "description": "",
                        "channelTitle": "CNBC",
                        "publishedAt": "2026-05-01T12:00:00Z"
                    },
                    "statistics": {"viewCount": "120000", "likeCount": "900"},
                    "contentDetails": {"duration": "PT1H2M30S"}
                }
            ]
        }"#;

        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        let info = VideoInfo::from_resource(response.items[0].clone());

        assert_eq!(info.video_id, "abc123");
        assert_eq!(info.url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(info.view_count, 120_000);
        assert_eq!(info.duration_seconds, 3750);
    }
}
