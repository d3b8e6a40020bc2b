//! # Web Page Crawler Module
//!
//! This module fetches a single web page and prepares it for the RAG
//! pipeline. It is the first stage of the workflow, responsible for
//! gathering the raw head/body markup and the page's hyperlinks.
//!
//! ## Key Components
//!
//! - `Page`: a fetched page with its extracted markup and classified links
//! - `fetch_page`: fetch a URL and extract its content
//! - `extract_page`: pure extraction from an HTML string (no network)
//! - `classify_links`: filter, dedup, and partition raw hrefs
//!
//! The crawler deliberately fetches exactly one page per call; walking
//! discovered links is the job of the ingestion layer.

mod error;
mod fetch;
mod links;

pub use error::CrawlError;
pub use fetch::{extract_page, fetch_page};
pub use links::classify_links;

use serde::{Deserialize, Serialize};

/// Represents a fetched web page with extracted markup and links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,

    /// Inner markup of the `<head>` element, empty if absent
    pub head_markup: String,

    /// Inner markup of the `<body>` element, empty if absent
    pub body_markup: String,

    /// Classified hyperlinks harvested from anchor elements
    pub links: PageLinks,
}

/// Hyperlinks of a page after filtering and deduplication
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    /// Every surviving href, deduplicated, in document order
    pub all: Vec<String>,

    /// Hrefs that do not start with `https://` (relative or same-site)
    pub internal: Vec<String>,

    /// Hrefs that start with `https://`
    pub external: Vec<String>,
}
