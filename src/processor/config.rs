//! # Ingestion Configuration Module
//!
//! Configuration for the page ingestion pipeline. Controls how body text is
//! chunked before embedding and how far discovered internal links are
//! followed.
//!
//! `max_depth` defaults to 0: exactly one page per seed URL, no link
//! walking. Raising it lets the ingestion layer enqueue internal links up
//! to that depth.

/// Configuration for page ingestion
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Maximum words per body chunk
    pub chunk_size: usize,

    /// How many levels of internal links to follow (0 = seed pages only)
    pub max_depth: u32,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            max_depth: 0,
        }
    }
}

/// Builder for IngestOptions
#[derive(Debug, Default)]
pub struct IngestOptionsBuilder {
    options: IngestOptions,
}

impl IngestOptionsBuilder {
    /// Create a new builder with default options
    pub fn new() -> Self {
        Self {
            options: IngestOptions::default(),
        }
    }

    /// Set the maximum words per chunk
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.options.chunk_size = chunk_size;
        self
    }

    /// Set the link-following depth
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Build the options
    pub fn build(self) -> IngestOptions {
        self.options
    }
}

impl IngestOptions {
    /// Create a new builder
    pub fn builder() -> IngestOptionsBuilder {
        IngestOptionsBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = IngestOptions::default();
        assert_eq!(options.chunk_size, 500);
        assert_eq!(options.max_depth, 0);
    }

    #[test]
    fn test_builder() {
        let options = IngestOptions::builder()
            .chunk_size(1000)
            .max_depth(2)
            .build();

        assert_eq!(options.chunk_size, 1000);
        assert_eq!(options.max_depth, 2);
    }
}
