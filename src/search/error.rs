//! Error types for the search module

use crate::error::Error as CrateError;
use crate::index::StoreError;
use thiserror::Error;

/// Errors that can occur while answering a question
#[derive(Debug, Error)]
pub enum SearchError {
    /// The question was empty or otherwise unusable
    #[error("Invalid question: {0}")]
    InvalidQuery(String),

    /// Error occurred during embedding generation
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Error occurred querying the vector store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error occurred during answer generation
    #[error("Generation error: {0}")]
    Generation(String),
}

impl From<SearchError> for CrateError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(msg) => CrateError::InvalidInput(msg),
            SearchError::Embedding(msg) | SearchError::Generation(msg) => CrateError::Service(msg),
            SearchError::Store(e) => e.into(),
        }
    }
}
