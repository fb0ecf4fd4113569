//! Core data types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};

/// A named individual holding an executive title at a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Person's name as it appeared on the page (or in curated data)
    pub name: String,

    /// Executive title ("CEO", "Chief Financial Officer", ...)
    pub title: String,

    /// Page the pair was extracted from, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Leader {
    /// Create a leader with no source URL (curated/stored data).
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            source_url: None,
        }
    }

    /// Attach the page URL the pair was extracted from.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Deduplication key: lowercase name with whitespace collapsed.
    pub fn normalized_name(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Which data tier produced an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Live extraction from the company's own site
    Scraped,
    /// Curated static directory
    Fallback,
    /// Persistent store hit
    Database,
    /// Process-local cache hit
    Cache,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataSource::Scraped => "scraped",
            DataSource::Fallback => "fallback",
            DataSource::Database => "database",
            DataSource::Cache => "cache",
        };
        write!(f, "{}", s)
    }
}

/// The outcome of analyzing one company domain.
///
/// Constructed once per analyze call and not mutated afterwards. An empty
/// leader list is a valid result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Canonical domain the analysis ran against
    pub domain: String,

    /// Leaders in rank order (earlier mentions first)
    pub leaders: Vec<Leader>,

    /// Which tier produced the leaders
    pub data_source: DataSource,
}

impl AnalysisReport {
    /// Build a report for a domain and tier.
    pub fn new(domain: impl Into<String>, leaders: Vec<Leader>, data_source: DataSource) -> Self {
        Self {
            domain: domain.into(),
            leaders,
            data_source,
        }
    }

    /// An empty-but-successful analysis.
    pub fn empty(domain: impl Into<String>) -> Self {
        Self::new(domain, Vec::new(), DataSource::Scraped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name_collapses_whitespace() {
        let leader = Leader::new("  Tim   Cook ", "CEO");
        assert_eq!(leader.normalized_name(), "tim cook");
    }

    #[test]
    fn test_data_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DataSource::Scraped).unwrap(),
            "\"scraped\""
        );
        assert_eq!(
            serde_json::to_string(&DataSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }

    #[test]
    fn test_leader_source_url_skipped_when_absent() {
        let json = serde_json::to_string(&Leader::new("Tim Cook", "CEO")).unwrap();
        assert!(!json.contains("source_url"));

        let json = serde_json::to_string(
            &Leader::new("Tim Cook", "CEO").with_source_url("https://apple.com/leadership"),
        )
        .unwrap();
        assert!(json.contains("source_url"));
    }
}
