//! Page fetching and content extraction for the crawler module

use crate::crawler::error::CrawlError;
use crate::crawler::{classify_links, Page};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Fetch a web page and extract its head/body markup and links.
///
/// Issues a single GET request. Transport and HTTP status errors propagate
/// to the caller without retries or backoff.
///
/// # Arguments
///
/// * `http` - The HTTP client to use
/// * `url` - The URL to fetch; must be non-empty
///
/// # Returns
///
/// The extracted `Page`
#[instrument(skip(http))]
pub async fn fetch_page(http: &reqwest::Client, url: &str) -> Result<Page, CrawlError> {
    if url.trim().is_empty() {
        return Err(CrawlError::InvalidInput("URL is required".to_string()));
    }

    debug!("Fetching {}", url);
    let html = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    extract_page(url, &html)
}

/// Extract head markup, body markup, and classified links from an HTML
/// document. Pure function over the markup; performs no network calls.
///
/// Missing `<head>` or `<body>` elements yield empty strings. Anchor hrefs
/// are collected in document order before classification.
pub fn extract_page(url: &str, html: &str) -> Result<Page, CrawlError> {
    let document = Html::parse_document(html);

    let head_markup = inner_markup(&document, "head")?;
    let body_markup = inner_markup(&document, "body")?;

    let anchor_selector = Selector::parse("a")
        .map_err(|e| CrawlError::HtmlParse(format!("Failed to parse anchor selector: {}", e)))?;
    let hrefs = document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(String::from);

    Ok(Page {
        url: url.to_string(),
        head_markup,
        body_markup,
        links: classify_links(hrefs),
    })
}

/// Serialized inner markup of the first element matching `selector`,
/// or an empty string when the element is absent.
fn inner_markup(document: &Html, selector: &str) -> Result<String, CrawlError> {
    let selector = Selector::parse(selector)
        .map_err(|e| CrawlError::HtmlParse(format!("Failed to parse selector: {}", e)))?;

    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.inner_html())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<html>
        <head><title>Sample</title><meta charset="utf-8"></head>
        <body>
            <p>First paragraph.</p>
            <a href="/about">About</a>
            <a href="#top">Top</a>
            <a href="https://other.site/page">Other</a>
            <a href="mailto:someone@example.com">Mail</a>
        </body>
    </html>"##;

    #[test]
    fn test_extracts_head_and_body_markup() {
        let page = extract_page("https://example.com/", SAMPLE).unwrap();

        assert!(page.head_markup.contains("<title>Sample</title>"));
        assert!(page.head_markup.contains("charset"));
        assert!(page.body_markup.contains("<p>First paragraph.</p>"));
        assert!(!page.body_markup.contains("<title>"));
    }

    #[test]
    fn test_collects_and_classifies_anchors() {
        let page = extract_page("https://example.com/", SAMPLE).unwrap();

        assert_eq!(page.links.internal, vec!["/about"]);
        assert_eq!(page.links.external, vec!["https://other.site/page"]);
        assert_eq!(page.links.all.len(), 2);
    }

    #[test]
    fn test_missing_head_and_body_yield_empty_strings() {
        let page = extract_page("https://example.com/", "<p>bare fragment</p>").unwrap();

        assert_eq!(page.head_markup, "");
        // html5 parsing wraps fragments in an implicit body
        assert!(page.body_markup.contains("bare fragment"));
        assert!(page.links.all.is_empty());
    }

    #[tokio::test]
    async fn test_empty_url_fails_without_network() {
        let http = reqwest::Client::new();

        let result = fetch_page(&http, "").await;
        assert!(matches!(result, Err(CrawlError::InvalidInput(_))));

        let result = fetch_page(&http, "   ").await;
        assert!(matches!(result, Err(CrawlError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(SAMPLE)
            .expect(1)
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let page = fetch_page(&http, &server.url()).await.unwrap();

        assert!(page.head_markup.contains("Sample"));
        assert_eq!(page.links.internal, vec!["/about"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_page_propagates_http_errors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let http = reqwest::Client::new();
        let result = fetch_page(&http, &server.url()).await;

        assert!(matches!(result, Err(CrawlError::Http(_))));
        mock.assert_async().await;
    }
}
