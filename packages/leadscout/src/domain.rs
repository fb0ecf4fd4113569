//! Domain normalization and validation.
//!
//! Everything downstream keys on the canonical registrable domain, so this
//! is the first step of every analysis: free-text input ("tesla.com",
//! "https://www.tesla.com/about") becomes a lowercase host with no scheme,
//! no `www.` prefix and no path.

use url::Url;

use crate::error::{LeadScoutError, Result};

/// Normalize free-text input to a canonical domain.
///
/// Accepts bare domains and full URLs with paths or query strings; the host
/// is all that survives. Fails with `InvalidInput` for empty input or input
/// that yields no plausible host.
pub fn normalize_domain(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LeadScoutError::InvalidInput {
            reason: "empty input".to_string(),
        });
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme).map_err(|_| LeadScoutError::InvalidInput {
        reason: format!("could not parse '{}'", trimmed),
    })?;

    let host = parsed
        .host_str()
        .ok_or_else(|| LeadScoutError::InvalidInput {
            reason: format!("no host in '{}'", trimmed),
        })?;

    let domain = host.strip_prefix("www.").unwrap_or(host).to_lowercase();

    if domain.is_empty() || !domain.contains('.') || !domain.chars().any(|c| c.is_alphanumeric()) {
        return Err(LeadScoutError::InvalidInput {
            reason: format!("'{}' is not a valid domain", trimmed),
        });
    }

    Ok(domain)
}

/// Reject domains that can never be a public company site.
///
/// Loopback and private-range hosts are refused up front so the scraper
/// never issues requests into local infrastructure.
pub fn validate_domain(domain: &str) -> Result<()> {
    let blocked = domain == "localhost"
        || domain.starts_with("localhost.")
        || domain.starts_with("127.")
        || domain.starts_with("10.")
        || domain.starts_with("192.168.")
        || is_private_172(domain);

    if blocked {
        return Err(LeadScoutError::InvalidInput {
            reason: format!("'{}' is not a public domain", domain),
        });
    }

    Ok(())
}

/// 172.16.0.0/12 check on the dotted string form.
fn is_private_172(domain: &str) -> bool {
    let mut parts = domain.split('.');
    if parts.next() != Some("172") {
        return false;
    }
    matches!(
        parts.next().and_then(|p| p.parse::<u8>().ok()),
        Some(octet) if (16..=31).contains(&octet)
    )
}

/// Best-effort display name for a company, from its domain.
///
/// "apple.com" -> "Apple". Used when no better name is known.
pub fn company_name_from_domain(domain: &str) -> String {
    let stem = domain.split('.').next().unwrap_or(domain);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => stem.to_string(),
    }
}
