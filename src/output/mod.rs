//! Output module for persisting crawl results
//!
//! This module handles:
//! - Writing the visited addresses to the flat text artifact
//! - Collecting and printing traversal statistics

pub mod stats;
mod text_file;
mod traits;

pub use stats::{print_statistics, TraversalStats};
pub use text_file::TextFileOutput;
pub use traits::{OutputError, OutputHandler, OutputResult};
