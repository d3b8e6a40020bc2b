//! Error types for the processor module

use crate::error::Error as CrateError;
use crate::index::StoreError;
use thiserror::Error;

/// Error type for processor operations
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Embedding generation error
    #[error("Embedding generation error: {0}")]
    EmbeddingGeneration(String),

    /// Vector store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<ProcessError> for CrateError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::EmbeddingGeneration(msg) => CrateError::Service(msg),
            ProcessError::Store(e) => e.into(),
            _ => CrateError::Process(err.to_string()),
        }
    }
}
