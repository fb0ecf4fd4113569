//! Interview search for company leaders.
//!
//! Finds recent long-form interviews on YouTube for each leader, scored for
//! strategic value: premium business media and real interviews rank above
//! passing mentions and shorts.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use youtube_client::{VideoInfo, YouTubeClient};

/// One interview result, in response shape.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewHit {
    pub title: String,
    pub url: String,
    pub channel_title: String,
    pub published_at: String,
}

/// Leader name -> ranked interviews.
pub type InterviewMap = HashMap<String, Vec<InterviewHit>>;

/// Searches interview sources for a set of leaders.
#[async_trait]
pub trait InterviewSearcher: Send + Sync {
    /// Search every leader; a leader with no hits maps to an empty list.
    async fn search_leaders(&self, leader_names: &[String], company_name: &str) -> InterviewMap;
}

/// Searcher used when no interview source is configured: every leader maps
/// to an empty list.
#[derive(Default)]
pub struct NoopInterviewSearcher;

impl NoopInterviewSearcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterviewSearcher for NoopInterviewSearcher {
    async fn search_leaders(&self, leader_names: &[String], _company_name: &str) -> InterviewMap {
        leader_names
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect()
    }
}

/// Only videos at least this long are considered interviews.
const MIN_INTERVIEW_SECS: u64 = 600;

/// How far back to search.
const LOOKBACK_DAYS: i64 = 180;

/// Candidates requested per leader before scoring.
const SEARCH_RESULTS_PER_LEADER: u32 = 8;

/// Ranked results kept per leader.
const MAX_HITS_PER_LEADER: usize = 15;

/// YouTube-backed interview searcher.
pub struct YouTubeInterviewSearcher {
    client: YouTubeClient,
}

impl YouTubeInterviewSearcher {
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }

    async fn search_one(&self, leader_name: &str, company_name: &str) -> Vec<InterviewHit> {
        let query = format!("{} interview", leader_name);
        let published_after = Utc::now() - Duration::days(LOOKBACK_DAYS);

        let videos = match self
            .client
            .search_videos(&query, SEARCH_RESULTS_PER_LEADER, Some(published_after))
            .await
        {
            Ok(videos) => videos,
            Err(e) => {
                warn!(leader = %leader_name, error = %e, "interview search failed");
                return Vec::new();
            }
        };

        let mut scored: Vec<(f64, VideoInfo)> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for video in videos {
            if !seen.insert(video.video_id.clone()) {
                continue;
            }
            let score = score_video(&video, leader_name, company_name);
            if score > 0.0 {
                scored.push((score, video));
            }
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.1.published_at.cmp(&a.1.published_at))
        });

        debug!(
            leader = %leader_name,
            kept = scored.len(),
            "interview candidates scored"
        );

        scored
            .into_iter()
            .take(MAX_HITS_PER_LEADER)
            .map(|(_, video)| InterviewHit {
                title: video.title,
                url: video.url,
                channel_title: video.channel_title,
                published_at: video.published_at,
            })
            .collect()
    }
}

#[async_trait]
impl InterviewSearcher for YouTubeInterviewSearcher {
    async fn search_leaders(&self, leader_names: &[String], company_name: &str) -> InterviewMap {
        let mut results = InterviewMap::new();

        for name in leader_names {
            let hits = self.search_one(name, company_name).await;
            info!(leader = %name, hits = hits.len(), "interview search completed");
            results.insert(name.clone(), hits);
        }

        results
    }
}

/// Channels with the highest strategic value.
const PREMIUM_CHANNELS: &[&str] = &[
    "cnbc",
    "bloomberg",
    "wsj",
    "wall street journal",
    "reuters",
    "financial times",
    "forbes",
    "fortune",
    "axios",
];

/// Strategic business events and institutions.
const STRATEGIC_CHANNELS: &[&str] = &[
    "ted",
    "tedx",
    "sxsw",
    "code conference",
    "goldman sachs",
    "jpmorgan",
    "morgan stanley",
];

/// Phrases indicating an actual interview rather than commentary.
const INTERVIEW_KEYWORDS: &[&str] = &[
    "interview with",
    "exclusive interview",
    "fireside chat",
    "q&a",
    "in conversation with",
    "panel discussion",
    "sits down with",
    "one-on-one",
    "ceo interview",
    "executive interview",
];

/// Score a video for strategic value (0 means discard).
pub fn score_video(video: &VideoInfo, leader_name: &str, company_name: &str) -> f64 {
    // Shorts and clips are never worth prep time.
    if video.duration_seconds < MIN_INTERVIEW_SECS {
        return 0.0;
    }

    let title = video.title.to_lowercase();
    let description = video.description.to_lowercase();
    let channel = video.channel_title.to_lowercase();
    let company = company_name.to_lowercase();
    let leader = leader_name.to_lowercase();

    let mut score = 0.0;

    if PREMIUM_CHANNELS.iter().any(|c| channel.contains(c)) {
        score += 35.0;
    } else if STRATEGIC_CHANNELS.iter().any(|c| channel.contains(c)) {
        score += 30.0;
    } else if channel.contains(&company) {
        score += 25.0;
    } else if channel.contains("earnings") || channel.contains("investor") {
        score += 20.0;
    } else if channel.contains("conference") || channel.contains("summit") {
        score += 18.0;
    }

    // A video that never mentions the company is usually about someone else.
    if !title.contains(&company) && !description.contains(&company) {
        score -= 50.0;
    }

    for keyword in INTERVIEW_KEYWORDS {
        if title.contains(keyword) || description.contains(keyword) {
            score += 30.0;
        }
    }

    // Commentary about the leader, not with them.
    for pattern in [
        format!("about {}", leader),
        format!("discusses {}", leader),
        format!("reacts to {}", leader),
    ] {
        if title.contains(&pattern) || description.contains(&pattern) {
            score -= 25.0;
        }
    }

    score
}
