//! Typed errors for the leadscout library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during company analysis.
///
/// Only `InvalidInput` crosses the analyzer boundary to callers; fetch and
/// storage failures are absorbed internally and degrade the result to the
/// next data tier.
#[derive(Debug, Error)]
pub enum LeadScoutError {
    /// Input could not be turned into a usable domain
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Errors that can occur while fetching a candidate page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// Request exceeded its timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// URL could not be parsed
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors that can occur in a `LeaderStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Stored row could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type alias for leadscout operations.
pub type Result<T> = std::result::Result<T, LeadScoutError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
