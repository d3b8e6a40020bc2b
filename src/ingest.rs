//! # Ingestion Module
//!
//! Ties the pipeline together: fetch a page, embed it, and write its
//! records into the vector store. `ingest_page` handles a single URL;
//! `ingest_site` additionally follows internal links breadth-first up to a
//! configured depth, visiting each URL at most once.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::crawler::{fetch_page, Page};
use crate::error::Result;
use crate::index::VectorStore;
use crate::model::Client;
use crate::processor::{index_page, IngestOptions};
use rig::{completion::CompletionModel, embeddings::EmbeddingModel};

/// Fetch a single page and write its records into the vector store.
///
/// # Arguments
///
/// * `http` - The HTTP client used for fetching
/// * `client` - The model client for embeddings
/// * `store` - The vector store to write into
/// * `url` - The page URL; must not be blank
/// * `options` - Chunking configuration
///
/// # Returns
///
/// The fetched page, including its classified links
#[instrument(skip(http, client, store, options))]
pub async fn ingest_page<C, E>(
    http: &reqwest::Client,
    client: &Client<C, E>,
    store: &VectorStore,
    url: &str,
    options: &IngestOptions,
) -> Result<Page>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    let page = fetch_page(http, url).await?;
    let written = index_page(client, store, &page, options).await?;
    info!("Stored {} records for {}", written, page.url);
    Ok(page)
}

/// Ingest a page and follow its internal links breadth-first.
///
/// The seed URL is always ingested; a failure there aborts the crawl.
/// Internal links are resolved against the page they appear on and
/// enqueued while the current depth is below `options.max_depth`. Each
/// resolved URL is visited at most once, so link cycles terminate. A
/// fetch or indexing failure on a followed link is logged and skipped
/// rather than aborting the remaining frontier.
///
/// With the default `max_depth` of 0 this ingests exactly the seed page.
///
/// # Returns
///
/// The pages ingested, in visit order
#[instrument(skip(http, client, store, options))]
pub async fn ingest_site<C, E>(
    http: &reqwest::Client,
    client: &Client<C, E>,
    store: &VectorStore,
    url: &str,
    options: &IngestOptions,
) -> Result<Vec<Page>>
where
    C: CompletionModel,
    E: EmbeddingModel,
{
    let mut pages = Vec::new();
    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();
    frontier.push_back((url.to_string(), 0u32));

    while let Some((page_url, depth)) = frontier.pop_front() {
        if !visited.insert(page_url.clone()) {
            continue;
        }

        let page = match ingest_page(http, client, store, &page_url, options).await {
            Ok(page) => page,
            Err(e) if depth == 0 => return Err(e),
            Err(e) => {
                warn!("Skipping {}: {}", page_url, e);
                continue;
            }
        };

        if depth < options.max_depth {
            for link in resolve_internal_links(&page) {
                if !visited.contains(&link) {
                    frontier.push_back((link, depth + 1));
                }
            }
        }

        pages.push(page);
    }

    info!("Ingested {} pages starting from {}", pages.len(), url);
    Ok(pages)
}

/// Resolve a page's internal links against the page URL. Links that fail
/// to resolve are skipped.
fn resolve_internal_links(page: &Page) -> Vec<String> {
    let base = match Url::parse(&page.url) {
        Ok(base) => base,
        Err(e) => {
            debug!("Cannot resolve links against {}: {}", page.url, e);
            return Vec::new();
        }
    };

    page.links
        .internal
        .iter()
        .filter_map(|link| match base.join(link) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                debug!("Skipping unresolvable link {}: {}", link, e);
                None
            }
        })
        .collect()
}
