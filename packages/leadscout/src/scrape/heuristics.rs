//! Extraction heuristics over a leadership page.
//!
//! Three methods run in priority order: JSON-LD structured data, repeated
//! DOM card patterns, and plain-text patterns. Results are merged, filtered
//! against the title vocabulary, and deduplicated by normalized name with
//! document order preserved.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::types::Leader;

/// Words that indicate a leadership page rather than a generic one.
const LEADERSHIP_INDICATORS: &[&str] = &["leadership", "executive", "team", "management", "about us"];

/// Tokens that disqualify a capitalized phrase from being a person's name.
const NAME_STOPWORDS: &[&str] = &[
    "team",
    "leadership",
    "management",
    "board",
    "about",
    "our",
    "meet",
    "executive",
    "executives",
    "officers",
    "company",
    "contact",
];

/// `Chief <word> [<word>] Officer` titles the vocabulary can't enumerate.
const CHIEF_OFFICER_PATTERN: &str = r"chief\s+\w+(?:\s+\w+)?\s+officer";

/// A name-shaped phrase: 2-4 capitalized tokens.
const NAME_PATTERN: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}";

/// Does the page look like it talks about leadership at all?
pub(crate) fn has_leadership_content(document: &Html) -> bool {
    let text = page_text(document).to_lowercase();
    LEADERSHIP_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
}

/// Whole-document text with element boundaries collapsed to single spaces.
fn page_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name/title pair extractor with a compiled title vocabulary.
pub struct LeaderExtractor {
    title_matcher: Regex,
    text_patterns: Vec<Regex>,
}

impl LeaderExtractor {
    /// Compile the heuristics for a title vocabulary.
    pub fn new(vocabulary: &[String]) -> Self {
        // Longest alternatives first so "Chief Executive Officer" wins
        // over a bare "CEO" prefix match.
        let mut terms: Vec<String> = vocabulary.iter().map(|t| regex::escape(t)).collect();
        terms.sort_by_key(|t| std::cmp::Reverse(t.len()));
        let alternation = format!("{}|{}", CHIEF_OFFICER_PATTERN, terms.join("|"));

        // Fixed patterns over an escaped alternation; parse failure is a
        // programming error.
        let title_matcher = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap();

        let title_group = format!("(?P<title>(?i:{}))", alternation);
        let text_patterns = vec![
            // "Tim Cook, CEO"
            Regex::new(&format!(r"(?P<name>{}),?\s+{}\b", NAME_PATTERN, title_group)).unwrap(),
            // "CEO: Tim Cook"
            Regex::new(&format!(r"\b{}:?\s+(?P<name>{})", title_group, NAME_PATTERN)).unwrap(),
            // "Tim Cook - CEO"
            Regex::new(&format!(
                r"(?P<name>{})\s*[-\u{{2013}}\u{{2014}}]\s*{}\b",
                NAME_PATTERN, title_group
            ))
            .unwrap(),
        ];

        Self {
            title_matcher,
            text_patterns,
        }
    }

    /// Run all methods against a parsed page and return the ranked,
    /// deduplicated leader list, capped at `cap`.
    pub fn extract(&self, document: &Html, page_url: &str, cap: usize) -> Vec<Leader> {
        let mut found = self.from_structured_data(document);
        found.extend(self.from_dom_patterns(document));
        found.extend(self.from_text_patterns(&page_text(document)));

        let mut leaders = dedupe_by_name(found);
        leaders.truncate(cap);
        leaders
            .into_iter()
            .map(|l| l.with_source_url(page_url))
            .collect()
    }

    /// Does a title belong to the controlled vocabulary?
    pub fn title_matches(&self, title: &str) -> bool {
        self.title_matcher.is_match(title)
    }

    /// Method 1: JSON-LD `Organization.employee` entries.
    fn from_structured_data(&self, document: &Html) -> Vec<Leader> {
        let mut leaders = Vec::new();
        let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
            Ok(s) => s,
            Err(_) => return leaders,
        };

        for script in document.select(&selector) {
            let raw = script.text().collect::<String>();
            if let Ok(value) = serde_json::from_str::<Value>(&raw) {
                self.collect_organization_people(&value, &mut leaders);
            }
        }

        leaders
    }

    fn collect_organization_people(&self, value: &Value, out: &mut Vec<Leader>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.collect_organization_people(item, out);
                }
            }
            Value::Object(obj) => {
                if let Some(graph) = obj.get("@graph") {
                    self.collect_organization_people(graph, out);
                }
                if obj.get("@type").and_then(Value::as_str) != Some("Organization") {
                    return;
                }
                let Some(employees) = obj.get("employee") else {
                    return;
                };
                let employees: Vec<&Value> = match employees {
                    Value::Array(list) => list.iter().collect(),
                    single => vec![single],
                };
                for employee in employees {
                    let name = employee.get("name").and_then(Value::as_str).unwrap_or("");
                    let title = employee
                        .get("jobTitle")
                        .and_then(Value::as_str)
                        .unwrap_or("");
                    if !name.is_empty() && !title.is_empty() && self.title_matches(title) {
                        out.push(Leader::new(name.trim(), title.trim()));
                    }
                }
            }
            _ => {}
        }
    }

    /// Method 2: repeated card elements with name/title children.
    fn from_dom_patterns(&self, document: &Html) -> Vec<Leader> {
        let card_selectors = [
            ".executive",
            ".leader",
            ".management",
            ".team-member",
            "[class*='executive']",
            "[class*='leader']",
            "[class*='team']",
            "[class*='officer']",
        ];

        let mut leaders = Vec::new();
        for selector_str in card_selectors {
            let Ok(selector) = Selector::parse(selector_str) else {
                continue;
            };
            for card in document.select(&selector) {
                if let Some(leader) = self.pair_from_card(card) {
                    leaders.push(leader);
                }
            }
        }
        leaders
    }

    fn pair_from_card(&self, card: ElementRef) -> Option<Leader> {
        let name_selectors = [".name", ".executive-name", ".leader-name", "h3", "h4"];
        let title_selectors = [".title", ".job-title", ".position", ".role"];

        let mut name = first_match_text(card, &name_selectors);
        let mut title = first_match_text(card, &title_selectors);

        // Title-only card: the name is usually the nearest heading above it.
        if title.is_some() && name.is_none() {
            name = parent_heading(card);
        }

        // Name-only card: scan the card text for a vocabulary term.
        if name.is_some() && title.is_none() {
            let text = element_text(card);
            title = self
                .title_matcher
                .find(&text)
                .map(|m| m.as_str().to_string());
        }

        let name = name?;
        let title = title?;
        if looks_like_name(&name) && self.title_matches(&title) {
            Some(Leader::new(name, title))
        } else {
            None
        }
    }

    /// Method 3: "Name, TITLE" / "TITLE: Name" / "Name - TITLE" in text.
    fn from_text_patterns(&self, text: &str) -> Vec<Leader> {
        let mut leaders = Vec::new();
        for pattern in &self.text_patterns {
            for caps in pattern.captures_iter(text) {
                let (Some(name), Some(title)) = (caps.name("name"), caps.name("title")) else {
                    continue;
                };
                let name = name.as_str().trim();
                if looks_like_name(name) {
                    leaders.push(Leader::new(name, title.as_str().trim()));
                }
            }
        }
        leaders
    }
}

/// Text of the first child matching any selector, in selector priority order.
fn first_match_text(card: ElementRef, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(el) = card.select(&selector).next() {
                let text = element_text(el);
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Collapsed text content of one element.
fn element_text(el: ElementRef) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Heading text from the card's parent element, if any.
fn parent_heading(card: ElementRef) -> Option<String> {
    let heading = Selector::parse("h1, h2, h3, h4, h5, h6").ok()?;
    let parent = card.parent().and_then(ElementRef::wrap)?;
    parent.select(&heading).next().map(element_text)
}

/// 2-4 capitalized tokens, none of them a generic page word.
fn looks_like_name(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return false;
    }
    tokens.iter().all(|token| {
        let starts_upper = token
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);
        let plausible_chars = token
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '-' || c == '.');
        starts_upper && plausible_chars && !NAME_STOPWORDS.contains(&token.to_lowercase().as_str())
    })
}

/// Keep the first occurrence of each normalized name.
fn dedupe_by_name(leaders: Vec<Leader>) -> Vec<Leader> {
    let mut seen = std::collections::HashSet::new();
    leaders
        .into_iter()
        .filter(|leader| seen.insert(leader.normalized_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> LeaderExtractor {
        LeaderExtractor::new(&crate::scrape::ScrapeConfig::default().title_vocabulary)
    }

    #[test]
    fn test_structured_data_extraction() {
        let html = r#"<html><head>
            <script type="application/ld+json">
            {
              "@type": "Organization",
              "name": "Example Corp",
              "employee": [
                {"@type": "Person", "name": "Tim Cook", "jobTitle": "CEO"},
                {"@type": "Person", "name": "Jeff Williams", "jobTitle": "COO"},
                {"@type": "Person", "name": "Random Person", "jobTitle": "Barista"}
              ]
            }
            </script>
            </head><body>Leadership</body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/about", 10);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].name, "Tim Cook");
        assert_eq!(leaders[0].title, "CEO");
        assert_eq!(leaders[1].name, "Jeff Williams");
    }

    #[test]
    fn test_dom_card_extraction() {
        let html = r#"<html><body>
            <h1>Our Leadership</h1>
            <div class="team-member"><h3>Satya Nadella</h3><p class="title">CEO</p></div>
            <div class="team-member"><h3>Amy Hood</h3><p class="title">CFO</p></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/team", 10);
        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].name, "Satya Nadella");
        assert_eq!(leaders[1].title, "CFO");
    }

    #[test]
    fn test_dom_card_title_from_text_scan() {
        let html = r#"<html><body>
            <div class="executive"><span class="name">Sundar Pichai</span> leads as CEO of the company.</div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/about", 10);
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].name, "Sundar Pichai");
        assert_eq!(leaders[0].title, "CEO");
    }

    #[test]
    fn test_text_pattern_extraction() {
        let html = r#"<html><body>
            <p>Leadership team</p>
            <p>Andy Jassy, CEO</p>
            <p>CFO: Brian Olsavsky</p>
            <p>Adam Selipsky - Senior Vice President</p>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/about", 10);
        let names: Vec<&str> = leaders.iter().map(|l| l.name.as_str()).collect();
        assert!(names.contains(&"Andy Jassy"));
        assert!(names.contains(&"Brian Olsavsky"));
        assert!(names.contains(&"Adam Selipsky"));
    }

    #[test]
    fn test_chief_officer_pattern() {
        let ex = extractor();
        assert!(ex.title_matches("Chief Design Officer"));
        assert!(ex.title_matches("Chief People Officer"));
        assert!(!ex.title_matches("Senior Engineer"));
    }

    #[test]
    fn test_titles_outside_vocabulary_rejected() {
        let html = r#"<html><body>
            <p>About our team</p>
            <div class="team-member"><h3>John Smith</h3><p class="title">Janitor</p></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/about", 10);
        assert!(leaders.is_empty());
    }

    #[test]
    fn test_duplicate_mentions_deduplicated() {
        let html = r#"<html><body>
            <p>Executive team</p>
            <div class="team-member"><h3>Tim Cook</h3><p class="title">CEO</p></div>
            <p>Tim Cook, CEO, said the quarter was strong.</p>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/about", 10);
        assert_eq!(leaders.len(), 1);
        assert_eq!(leaders[0].name, "Tim Cook");
    }

    #[test]
    fn test_result_cap_preserves_document_order() {
        let mut body = String::from("<p>Leadership team</p>");
        for i in 0..50u8 {
            let surname = format!(
                "{}{}",
                (b'A' + i / 26) as char,
                ((b'a' + i % 26) as char).to_string().repeat(3)
            );
            body.push_str(&format!(
                r#"<div class="team-member"><h3>Person {}</h3><p class="title">Director</p></div>"#,
                surname
            ));
        }
        let html = format!("<html><body>{}</body></html>", body);
        let document = Html::parse_document(&html);

        let leaders = extractor().extract(&document, "https://example.com/team", 10);
        assert_eq!(leaders.len(), 10);
        assert_eq!(leaders[0].name, "Person Aaaa");
        assert_eq!(leaders[9].name, "Person Ajjj");
    }

    #[test]
    fn test_generic_headings_not_treated_as_names() {
        let html = r#"<html><body>
            <div class="team"><h3>Meet The Team</h3><p class="title">CEO</p></div>
        </body></html>"#;
        let document = Html::parse_document(html);

        let leaders = extractor().extract(&document, "https://example.com/team", 10);
        assert!(leaders.is_empty());
    }

    #[test]
    fn test_looks_like_name_shapes() {
        assert!(looks_like_name("Tim Cook"));
        assert!(looks_like_name("Mary Jane Watson-Parker"));
        assert!(!looks_like_name("Tim"));
        assert!(!looks_like_name("One Two Three Four Five"));
        assert!(!looks_like_name("Our Leadership Team"));
        assert!(!looks_like_name("tim cook"));
    }
}
