//! Output handler traits and types
//!
//! This module defines the trait interface for persisting the result of a
//! traversal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// An output handler receives the visited addresses once, at the end of a
/// traversal, in visitation order.
pub trait OutputHandler {
    /// Persists the visited addresses, replacing whatever was stored before
    ///
    /// # Arguments
    ///
    /// * `visited` - Visited addresses in visitation order
    fn write_visited(&self, visited: &[String]) -> OutputResult<()>;

    /// Human-readable location of the stored result
    fn location(&self) -> String;
}
