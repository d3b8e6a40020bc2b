//! Error types for the pagerag crate

use thiserror::Error;

/// Result type for pagerag operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pagerag operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Page fetching or extraction error
    #[error("Crawl error: {0}")]
    Crawl(String),

    /// Chunking or embedding error
    #[error("Process error: {0}")]
    Process(String),

    /// Embedding or generation service failure, including rate limiting
    #[error("Service error: {0}")]
    Service(String),

    /// Vector store unavailable or a write/query failed
    #[error("Store error: {0}")]
    Store(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
