//! Error types for the YouTube client.

use thiserror::Error;

/// Result type for YouTube client operations.
pub type Result<T> = std::result::Result<T, YouTubeError>;

/// YouTube client errors.
#[derive(Debug, Error)]
pub enum YouTubeError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, quota exceeded, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
