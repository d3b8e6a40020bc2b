//! Error types for the crawler module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Missing or empty URL
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTML parsing error
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<CrawlError> for CrateError {
    fn from(err: CrawlError) -> Self {
        match err {
            CrawlError::InvalidInput(msg) => CrateError::InvalidInput(msg),
            CrawlError::Http(e) => CrateError::Http(e),
            _ => CrateError::Crawl(err.to_string()),
        }
    }
}
