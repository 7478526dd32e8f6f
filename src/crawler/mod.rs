//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded connect timeout
//! - Literal-prefix link extraction
//! - The breadth-first frontier and traversal loop
//! - Overall crawl coordination (seeds in, visited list out)

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::{Coordinator, CrawlOutcome};
pub use extractor::{extract_links, scan_line, LinkScan, HTTPS_PREFIX, HTTP_PREFIX};
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher};
pub use frontier::{traverse, DuplicatePolicy, Frontier, Traversal, TraverseOptions};

use crate::config::CrawlerConfig;

/// How the starting set of addresses is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CrawlMode {
    /// A single address typed by the operator
    Interactive,

    /// Every line of the seed file
    File,
}

impl CrawlMode {
    /// Visited-set cap configured for this mode
    pub fn cap(&self, config: &CrawlerConfig) -> usize {
        match self {
            CrawlMode::Interactive => config.interactive_cap,
            CrawlMode::File => config.file_cap,
        }
    }
}

/// Traversal options for a mode under the given crawler settings
pub fn traverse_options(mode: CrawlMode, config: &CrawlerConfig) -> TraverseOptions {
    let duplicates = if config.refetch_duplicates {
        DuplicatePolicy::Refetch
    } else {
        DuplicatePolicy::Skip
    };
    TraverseOptions::new(mode.cap(config)).with_duplicates(duplicates)
}
