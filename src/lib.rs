//! # pagerag - Web Page RAG Pipeline
//!
//! This crate ingests web pages into a vector database and answers
//! natural-language questions about them. It covers the full
//! Retrieval-Augmented Generation (RAG) loop for single pages:
//!
//! - Page fetching and head/body/link extraction
//! - Link classification (internal vs. external, noise filtered out)
//! - Deterministic word-bounded chunking
//! - Embedding generation through an OpenAI embedding model
//! - Vector storage and nearest-neighbor retrieval over a REST vector store
//! - Answer generation with retrieved page context
//!
//! ## Example
//!
//! ```rust,no_run
//! use pagerag::index::{VectorStore, COLLECTION_NAME, EMBEDDING_DIMENSIONS};
//! use pagerag::model::Client;
//! use pagerag::processor::IngestOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new_openai_from_env();
//!     let store = VectorStore::new(
//!         "http://localhost:6333",
//!         COLLECTION_NAME,
//!         EMBEDDING_DIMENSIONS,
//!     );
//!     let http = reqwest::Client::new();
//!
//!     let options = IngestOptions::default();
//!     let page = pagerag::ingest::ingest_page(
//!         &http,
//!         &client,
//!         &store,
//!         "https://example.com/",
//!         &options,
//!     )
//!     .await?;
//!     println!("ingested {} with {} links", page.url, page.links.all.len());
//!
//!     let answer =
//!         pagerag::search::answer_question(&client, &store, "What is this page about?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

mod error;

pub mod crawler;
pub mod index;
pub mod ingest;
pub mod model;
pub mod processor;
pub mod search;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}
