//! # Question Answering Module for RAG
//!
//! This module is the "retrieval and generation" half of the pipeline: it
//! turns a natural-language question into an answer grounded in previously
//! ingested page content.
//!
//! ## Answer Process
//!
//! 1. Convert the question to an embedding vector
//! 2. Query the vector store for the single nearest record
//! 3. Build a prompt from the question and the retrieved page fields
//! 4. Generate an answer with the completion model
//!
//! When nothing relevant is stored the model is prompted with the question
//! alone, so it answers from the preamble's framing without page context.

mod error;

pub use error::SearchError;

use crate::index::{PagePayload, VectorStore};
use crate::model::Client;
use crate::processor::embed_text;
use rig::agent::AgentBuilder;
use rig::completion::{CompletionModel, Prompt};
use rig::embeddings::EmbeddingModel;
use tracing::{debug, info, instrument};

/// System preamble framing the assistant for page questions
pub const ANSWER_PREAMBLE: &str =
    "You are a helpful AI Support Agent that can answer questions about a given webpage.";

/// Answer a question using the most relevant stored page content.
///
/// Embeds the question, retrieves the single best-matching record from the
/// store, and asks the completion model with that record's fields as
/// context. Blank fields of the retrieved record are left out of the
/// prompt.
///
/// # Arguments
///
/// * `client` - The model client for embeddings and completion
/// * `store` - The vector store holding ingested pages
/// * `question` - The user's question; must not be blank
///
/// # Returns
///
/// The generated answer text
#[instrument(skip(client, store))]
pub async fn answer_question<C, E>(
    client: &Client<C, E>,
    store: &VectorStore,
    question: &str,
) -> Result<String, SearchError>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    if question.trim().is_empty() {
        return Err(SearchError::InvalidQuery(
            "question must not be empty".to_string(),
        ));
    }

    let vector = embed_text(client.embedding(), question)
        .await
        .map_err(|e| SearchError::Embedding(e.to_string()))?;

    let results = store.query(&vector, 1).await?;
    match results.first() {
        Some(result) => debug!("Best match {} (score {})", result.payload.url, result.score),
        None => debug!("No stored content matched the question"),
    }

    let prompt = build_prompt(question, results.first().map(|r| &r.payload));

    let agent = AgentBuilder::new(client.completion().clone())
        .preamble(ANSWER_PREAMBLE)
        .build();
    let answer = agent
        .prompt(prompt.as_str())
        .await
        .map_err(|e| SearchError::Generation(e.to_string()))?;

    info!("Generated answer for question");
    Ok(answer)
}

/// Assemble the model prompt from the question and the retrieved record.
/// Blank context fields are omitted entirely.
fn build_prompt(question: &str, context: Option<&PagePayload>) -> String {
    let mut sections = Vec::new();
    if let Some(payload) = context {
        if !payload.url.trim().is_empty() {
            sections.push(format!("URL: {}", payload.url));
        }
        if !payload.head.trim().is_empty() {
            sections.push(format!("Page head: {}", payload.head));
        }
        if !payload.body.trim().is_empty() {
            sections.push(format!("Content: {}", payload.body));
        }
    }

    if sections.is_empty() {
        format!("Question: {}", question)
    } else {
        format!(
            "Context from the webpage:\n{}\n\nQuestion: {}",
            sections.join("\n"),
            question
        )
    }
}
