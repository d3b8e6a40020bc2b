//! # Content Processor Module
//!
//! This module turns a fetched page into stored embedding records. It owns
//! the chunking of body markup, embedding generation through the model
//! client, and the writes into the vector store.
//!
//! ## Key Components
//!
//! - `chunk_text`: deterministic word-bounded chunking
//! - `embed_text`: single-text embedding through the configured model
//! - `index_page`: embed-then-store a whole page (head plus body chunks)
//! - `IngestOptions`: chunk size and link-following depth
//!
//! Every record of a page is written under an id derived from the page URL,
//! so re-indexing a page overwrites its prior records rather than
//! accumulating duplicates.

mod chunking;
mod config;
mod error;

pub use chunking::chunk_text;
pub use config::{IngestOptions, IngestOptionsBuilder};
pub use error::ProcessError;

use crate::crawler::Page;
use crate::index::{PagePayload, VectorStore};
use crate::model::Client;
use rig::{completion::CompletionModel, embeddings::EmbeddingModel};
use tracing::{debug, info, instrument};

/// Generate an embedding vector for a single text.
///
/// Delegates to the configured embedding model. The call is a remote
/// request; failures propagate to the caller without retries and there is
/// no caching, so identical text embeds remotely every time.
///
/// # Arguments
///
/// * `model` - The embedding model to use
/// * `text` - The text to embed
///
/// # Returns
///
/// The embedding vector
pub async fn embed_text<E>(model: &E, text: &str) -> Result<Vec<f32>, ProcessError>
where
    E: EmbeddingModel,
{
    debug!("Generating embedding for text of length {}", text.len());

    let embeddings = model
        .embed_texts(vec![text.to_string()])
        .await
        .map_err(|e| {
            ProcessError::EmbeddingGeneration(format!("Failed to generate embedding: {}", e))
        })?;

    let embedding = embeddings.first().ok_or_else(|| {
        ProcessError::EmbeddingGeneration("failed to extract embedding".to_string())
    })?;

    Ok(embedding.vec.iter().map(|v| *v as f32).collect())
}

/// Embed a page and write its records into the vector store.
///
/// Writes the head markup first under the page URL with an empty body
/// field, then chunks the body markup and writes one record per chunk,
/// sequentially, each carrying the full head markup as context.
/// Whitespace-only chunks are skipped before embedding. A failed embed or
/// write aborts the remaining steps; records already written stay in place.
///
/// # Arguments
///
/// * `client` - The model client for embeddings
/// * `store` - The vector store to write into
/// * `page` - The fetched page
/// * `options` - Chunking configuration
///
/// # Returns
///
/// The number of records written
#[instrument(skip(client, store, page), fields(url = %page.url))]
pub async fn index_page<C, E>(
    client: &Client<C, E>,
    store: &VectorStore,
    page: &Page,
    options: &IngestOptions,
) -> Result<usize, ProcessError>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    debug!("Indexing page {}", page.url);

    let head_vector = embed_text(client.embedding(), &page.head_markup).await?;
    store
        .upsert(
            &page.url,
            &head_vector,
            PagePayload {
                url: page.url.clone(),
                body: String::new(),
                head: page.head_markup.clone(),
            },
        )
        .await?;
    let mut written = 1;

    let chunks = chunk_text(&page.body_markup, options.chunk_size);
    info!("Created {} chunks from {}", chunks.len(), page.url);

    for chunk in chunks {
        if chunk.trim().is_empty() {
            debug!("Skipping empty chunk");
            continue;
        }

        let vector = embed_text(client.embedding(), &chunk).await?;
        store
            .upsert(
                &page.url,
                &vector,
                PagePayload {
                    url: page.url.clone(),
                    body: chunk,
                    head: page.head_markup.clone(),
                },
            )
            .await?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::PageLinks;
    use crate::model::mock_model::{MockCompletionModel, MockEmbeddingModel};
    use crate::model::Client;
    use mockito::Matcher;

    fn mock_client() -> Client<MockCompletionModel, MockEmbeddingModel> {
        Client::new(
            MockCompletionModel::new(),
            MockEmbeddingModel::new(vec![0.1, 0.2, 0.3]),
        )
    }

    fn page_with(head: &str, body: &str) -> Page {
        Page {
            url: "https://site.test/".to_string(),
            head_markup: head.to_string(),
            body_markup: body.to_string(),
            links: PageLinks::default(),
        }
    }

    fn store_for(url: &str) -> VectorStore {
        VectorStore::new(url, "WebPages", 3)
    }

    #[tokio::test]
    async fn test_empty_body_stores_only_the_head_record() {
        let mut server = mockito::Server::new_async().await;
        let collection = server
            .mock("GET", "/collections/WebPages")
            .with_status(200)
            .with_body(r#"{"result": {}}"#)
            .create_async()
            .await;
        let upsert = server
            .mock("PUT", "/collections/WebPages/points")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .with_status(200)
            .with_body(r#"{"result": {"operation_id": 0, "status": "completed"}}"#)
            .expect(1)
            .create_async()
            .await;

        let client = mock_client();
        let store = store_for(&server.url());
        let page = page_with("H", "");

        let written = index_page(&client, &store, &page, &IngestOptions::default())
            .await
            .unwrap();

        assert_eq!(written, 1);
        collection.assert_async().await;
        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn test_body_chunks_are_written_after_the_head() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/WebPages")
            .with_status(200)
            .with_body(r#"{"result": {}}"#)
            .create_async()
            .await;
        // 7 words at chunk size 3 -> 3 chunks, plus the head record
        let upsert = server
            .mock("PUT", "/collections/WebPages/points")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .with_status(200)
            .with_body(r#"{"result": {"operation_id": 0, "status": "completed"}}"#)
            .expect(4)
            .create_async()
            .await;

        let client = mock_client();
        let store = store_for(&server.url());
        let page = page_with("<title>t</title>", "one two three four five six seven");
        let options = IngestOptions::builder().chunk_size(3).build();

        let written = index_page(&client, &store, &page, &options).await.unwrap();

        assert_eq!(written, 4);
        upsert.assert_async().await;
    }

    #[tokio::test]
    async fn test_store_failure_aborts_indexing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/collections/WebPages")
            .with_status(200)
            .with_body(r#"{"result": {}}"#)
            .create_async()
            .await;
        server
            .mock("PUT", "/collections/WebPages/points")
            .match_query(Matcher::UrlEncoded("wait".into(), "true".into()))
            .with_status(503)
            .with_body("service unavailable")
            .create_async()
            .await;

        let client = mock_client();
        let store = store_for(&server.url());
        let page = page_with("H", "some body words");

        let result = index_page(&client, &store, &page, &IngestOptions::default()).await;
        assert!(matches!(result, Err(ProcessError::Store(_))));
    }

    #[tokio::test]
    async fn test_embed_text_returns_model_vector() {
        let model = MockEmbeddingModel::new(vec![0.5, -0.5]);
        let vector = embed_text(&model, "hello").await.unwrap();
        assert_eq!(vector, vec![0.5, -0.5]);
    }
}
