//! Link classification for the crawler module

use crate::crawler::PageLinks;
use std::collections::HashSet;
use tracing::debug;

/// Classify raw href values harvested from anchor elements.
///
/// Noise is dropped before classification: empty hrefs, bare or leading
/// anchors (`#...`), hrefs containing `@` (mail links), and the root link
/// `/`. Survivors are deduplicated, keeping the first occurrence, and
/// partitioned into external links (starting with `https://`) and internal
/// links (everything else, including relative and malformed hrefs).
///
/// # Arguments
///
/// * `hrefs` - Raw href attribute values in document order
///
/// # Returns
///
/// The filtered, deduplicated links partitioned into internal and external
pub fn classify_links<I, S>(hrefs: I) -> PageLinks
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut links = PageLinks::default();

    for href in hrefs {
        let href = href.into();
        if href.is_empty() || href.starts_with('#') || href.contains('@') || href == "/" {
            continue;
        }
        if !seen.insert(href.clone()) {
            continue;
        }

        if href.starts_with("https://") {
            links.external.push(href.clone());
        } else {
            links.internal.push(href.clone());
        }
        links.all.push(href);
    }

    debug!(
        internal = links.internal.len(),
        external = links.external.len(),
        "classified links"
    );
    links
}
