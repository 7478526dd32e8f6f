//! Crawler coordinator - ties seeds, traversal and persistence together
//!
//! This module runs one crawl end to end:
//! - Choosing the seed source and cap for the crawl mode
//! - Running the traversal
//! - Writing the visited list to the output artifact

use crate::config::Config;
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::{traverse, Traversal};
use crate::crawler::{traverse_options, CrawlMode};
use crate::input::read_seed_file;
use crate::output::{OutputError, OutputHandler, TextFileOutput};
use crate::TrawlerError;
use std::path::Path;

/// Result of one crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Mode the crawl ran in
    pub mode: CrawlMode,

    /// Visited addresses and statistics
    pub traversal: Traversal,

    /// Set when the visited list could not be written; the traversal is still complete
    pub persist_error: Option<OutputError>,
}

impl CrawlOutcome {
    pub fn visited(&self) -> &[String] {
        &self.traversal.visited
    }

    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<F = HttpFetcher> {
    config: Config,
    fetcher: F,
    output: TextFileOutput,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(TrawlerError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, TrawlerError> {
        let fetcher = HttpFetcher::new(&config.crawler, &config.user_agent)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher> Coordinator<F> {
    /// Creates a coordinator around any fetcher
    pub fn with_fetcher(config: Config, fetcher: F) -> Self {
        let output = TextFileOutput::new(&config.output.traversed_path);
        Self {
            config,
            fetcher,
            output,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Crawls from a single operator-supplied address
    pub async fn crawl_address(&self, address: &str) -> CrawlOutcome {
        tracing::info!("Starting crawl from {}", address);
        self.run(CrawlMode::Interactive, vec![address.to_string()])
            .await
    }

    /// Crawls from every address in the configured seed file
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - The crawl ran (persistence may still have failed)
    /// * `Err(TrawlerError::Seed)` - The seed file is missing or unreadable; nothing was crawled
    pub async fn crawl_seed_file(&self) -> Result<CrawlOutcome, TrawlerError> {
        let seed_path = Path::new(&self.config.input.seed_path);
        let seeds = read_seed_file(seed_path)?;
        tracing::info!(
            "Starting crawl from {} seeds in {}",
            seeds.len(),
            seed_path.display()
        );
        Ok(self.run(CrawlMode::File, seeds).await)
    }

    /// Runs a traversal for `mode` and persists the visited list
    pub async fn run(&self, mode: CrawlMode, seeds: Vec<String>) -> CrawlOutcome {
        let options = traverse_options(mode, &self.config.crawler);
        let traversal = traverse(&self.fetcher, seeds, options).await;

        tracing::info!(
            "Storing {} traversed URLs to {}",
            traversal.visited.len(),
            self.output.location()
        );
        let persist_error = match self.output.write_visited(&traversal.visited) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Failed to store traversed URLs: {}", e);
                Some(e)
            }
        };

        CrawlOutcome {
            mode,
            traversal,
            persist_error,
        }
    }
}
