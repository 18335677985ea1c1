//! Upstream quote error types.

use thiserror::Error;

/// Result type for quote lookups.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur while fetching a quote.
///
/// The `Display` text of each variant is what the end user eventually reads,
/// so keep it short and human-readable.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The upstream answered with a non-2xx status.
    #[error("API error: {0}")]
    Status(u16),

    /// The request never completed (DNS, connect, reset, ...).
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a JSON quote record.
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL cannot carry a path segment.
    #[error("Invalid quotes base URL: {0}")]
    InvalidBaseUrl(String),
}

impl QuoteError {
    /// Create an invalid base URL error.
    pub fn invalid_base_url(msg: impl Into<String>) -> Self {
        Self::InvalidBaseUrl(msg.into())
    }
}
