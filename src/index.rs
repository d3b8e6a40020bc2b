//! # Vector Index Module
//!
//! This module wraps the external vector database behind a small REST
//! client. The database owns all persisted state; the crate only imposes
//! the record shape: a vector keyed by a URL-derived id with a
//! `{url, body, head}` payload.
//!
//! Similarity search itself is delegated entirely to the store; nothing in
//! this crate ranks or scores vectors.

mod error;
mod qdrant;

pub use error::StoreError;
pub use qdrant::VectorStore;

use serde::{Deserialize, Serialize};

/// Name of the backing collection for page records
pub const COLLECTION_NAME: &str = "WebPages";

/// Dimensionality of the embedding vectors (text-embedding-ada-002)
pub const EMBEDDING_DIMENSIONS: usize = 1536;

/// Metadata stored alongside each vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
    /// URL of the source page
    pub url: String,

    /// Body chunk text, empty for the head record
    pub body: String,

    /// Head markup of the source page
    pub head: String,
}

/// A single nearest-neighbor match returned by the store
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredPage {
    /// Similarity score assigned by the store
    pub score: f32,

    /// The stored metadata
    pub payload: PagePayload,
}
