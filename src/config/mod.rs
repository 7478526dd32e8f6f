//! Configuration module for Trawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section and key is optional; anything left out falls back to the
//! classic defaults (cap 100 for a single address, 1000 for a seed file, a five
//! second connect timeout, `traversedFiles.txt` for both seeds and results).
//!
//! # Example
//!
//! ```no_run
//! use trawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("trawler.toml")).unwrap();
//! println!("Interactive crawls stop after {} pages", config.crawler.interactive_cap);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, InputConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
