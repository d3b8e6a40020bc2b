//! # LLM Client Module
//!
//! This module provides a unified client interface for the LLM services the
//! pipeline depends on: one completion model for answer generation and one
//! embedding model for vectorizing text.
//!
//! ## Key Components
//!
//! - `Client`: A unified client that wraps both completion and embedding models
//! - `MockCompletionModel` / `MockEmbeddingModel`: in-process stand-ins for tests
//!
//! The client is generic over the `rig` model traits, so callers are wired
//! against the traits rather than a concrete provider. Production code uses
//! the OpenAI provider; tests inject the mocks.

use rig::{completion::CompletionModel, embeddings::EmbeddingModel, providers::openai};

pub mod mock_model;

pub use mock_model::{MockCompletionModel, MockEmbeddingModel};

/// Completion model used for answer generation
pub const COMPLETION_MODEL: &str = openai::GPT_4O;

#[derive(Debug, Clone)]
pub struct Client<C, E>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    completion_model: C,
    embedding_model: E,
}

impl Client<openai::CompletionModel, openai::EmbeddingModel> {
    /// Build a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Panics
    ///
    /// Panics when the variable is unset.
    pub fn new_openai_from_env() -> Self {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .expect("OPENAI_API_KEY environment variable must be set");
        let openai_client = openai::Client::new(&openai_api_key);
        Self::new_openai(openai_client)
    }

    pub fn new_openai(openai_client: openai::Client) -> Self {
        let completion_model = openai_client.completion_model(COMPLETION_MODEL);
        let embedding_model = openai_client.embedding_model(openai::TEXT_EMBEDDING_ADA_002);
        Self {
            completion_model,
            embedding_model,
        }
    }
}

impl<C, E> Client<C, E>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    pub fn new(completion_model: C, embedding_model: E) -> Self {
        Self {
            completion_model,
            embedding_model,
        }
    }

    pub fn completion(&self) -> &C {
        &self.completion_model
    }

    pub fn embedding(&self) -> &E {
        &self.embedding_model
    }
}
