//! Error types for the vector index module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for vector store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned an error response
    #[error("Store API error: {status_code} - {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<StoreError> for CrateError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Http(e) => CrateError::Http(e),
            _ => CrateError::Store(err.to_string()),
        }
    }
}
