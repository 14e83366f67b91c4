//! Error types for the news module

use thiserror::Error;

/// Errors that can occur while fetching from a news provider
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Well-formed response without a single usable article
    #[error("{provider} returned no articles")]
    EmptyResult {
        /// Provider name
        provider: &'static str,
    },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for NewsError {
    fn from(e: reqwest::Error) -> Self {
        NewsError::RequestFailed(e.to_string())
    }
}
