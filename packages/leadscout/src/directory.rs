//! Curated fallback directory of well-known leadership teams.
//!
//! Immutable reference data, injected into the analyzer rather than read
//! from a global, so tests can substitute fixtures.

use std::collections::HashMap;

use crate::types::Leader;

/// Static domain -> leaders mapping used when live extraction fails.
#[derive(Debug, Clone, Default)]
pub struct FallbackDirectory {
    entries: HashMap<String, Vec<Leader>>,
}

impl FallbackDirectory {
    /// An empty directory (no fallback tier).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a directory from explicit entries.
    pub fn from_entries<I, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (D, Vec<Leader>)>,
        D: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(domain, leaders)| (domain.into(), leaders))
                .collect(),
        }
    }

    /// The curated directory shipped with the library.
    pub fn curated() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "apple.com".to_string(),
            vec![
                Leader::new("Tim Cook", "CEO"),
                Leader::new("Jeff Williams", "COO"),
                Leader::new("Luca Maestri", "CFO"),
                Leader::new("Craig Federighi", "SVP of Software Engineering"),
                Leader::new("Eddy Cue", "SVP of Services"),
            ],
        );
        entries.insert(
            "microsoft.com".to_string(),
            vec![
                Leader::new("Satya Nadella", "CEO"),
                Leader::new("Brad Smith", "President"),
                Leader::new("Amy Hood", "CFO"),
                Leader::new("Judson Althoff", "EVP of Worldwide Commercial Business"),
                Leader::new("Scott Guthrie", "EVP of Cloud and AI"),
            ],
        );
        entries.insert(
            "google.com".to_string(),
            vec![
                Leader::new("Sundar Pichai", "CEO"),
                Leader::new("Ruth Porat", "CFO"),
                Leader::new("Kent Walker", "President of Global Affairs"),
                Leader::new("Philipp Schindler", "SVP and Chief Business Officer"),
                Leader::new("Prabhakar Raghavan", "SVP of Search"),
            ],
        );
        entries.insert(
            "amazon.com".to_string(),
            vec![
                Leader::new("Andy Jassy", "CEO"),
                Leader::new("Brian Olsavsky", "CFO"),
                Leader::new("David Zapolsky", "SVP of Global Public Policy"),
                Leader::new("Beth Galetti", "SVP of Human Resources"),
                Leader::new("Jeff Blackburn", "SVP of Global Media and Entertainment"),
            ],
        );
        entries.insert(
            "meta.com".to_string(),
            vec![
                Leader::new("Mark Zuckerberg", "CEO"),
                Leader::new("Sheryl Sandberg", "COO"),
                Leader::new("David Wehner", "CFO"),
                Leader::new("Mike Schroepfer", "CTO"),
                Leader::new("Nick Clegg", "VP of Global Affairs"),
            ],
        );

        Self { entries }
    }

    /// Curated leaders for a domain; empty for unknown domains.
    pub fn lookup(&self, domain: &str) -> Vec<Leader> {
        self.entries.get(domain).cloned().unwrap_or_default()
    }

    /// Number of domains with curated data.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_known_domains_have_ceo() {
        let directory = FallbackDirectory::curated();
        for domain in ["apple.com", "microsoft.com", "google.com"] {
            let leaders = directory.lookup(domain);
            assert!(!leaders.is_empty(), "no curated data for {}", domain);
            assert!(
                leaders.iter().any(|l| l.title == "CEO"),
                "no CEO entry for {}",
                domain
            );
        }
    }

    #[test]
    fn test_curated_apple_has_tim_cook() {
        let leaders = FallbackDirectory::curated().lookup("apple.com");
        assert!(leaders
            .iter()
            .any(|l| l.name == "Tim Cook" && l.title == "CEO"));
    }

    #[test]
    fn test_unknown_domain_is_empty_not_error() {
        let directory = FallbackDirectory::curated();
        assert!(directory.lookup("tesla.com").is_empty());
        assert!(directory.lookup("example.org").is_empty());
    }

    #[test]
    fn test_from_entries_substitutes_fixture_data() {
        let directory = FallbackDirectory::from_entries([(
            "example.com",
            vec![Leader::new("Jane Doe", "CEO")],
        )]);
        assert_eq!(directory.lookup("example.com").len(), 1);
        assert!(directory.lookup("apple.com").is_empty());
    }
}
