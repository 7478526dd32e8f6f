//! Trawler: a bounded breadth-first web crawler
//!
//! This crate walks the web breadth-first from a starting address (or a file of
//! addresses), pulling outbound links out of raw page text with a literal
//! prefix scan, until the frontier empties or the visited cap is reached. The
//! visited addresses are written to a flat text file, one per line.

pub mod config;
pub mod crawler;
pub mod input;
pub mod output;

use thiserror::Error;

/// Main error type for Trawler operations
#[derive(Debug, Error)]
pub enum TrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed file error: {0}")]
    Seed(#[from] input::SeedError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Trawler operations
pub type Result<T> = std::result::Result<T, TrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{extract_links, traverse, Coordinator, CrawlMode, FetchError, Fetcher, Traversal};
