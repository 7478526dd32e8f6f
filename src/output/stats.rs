//! Traversal statistics
//!
//! Counters gathered by the traversal loop and a console printer for them.

use crate::crawler::FetchError;
use std::collections::BTreeMap;

/// Counters for one traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Fetches attempted, duplicates included
    pub fetch_attempts: u64,

    /// Failed fetches by `FetchError::kind`
    pub failures: BTreeMap<&'static str, u64>,

    /// Links produced by the extractor
    pub links_discovered: u64,

    /// Links appended to the frontier
    pub links_admitted: u64,

    /// Dequeues of an address that was already visited
    pub duplicates_dequeued: u64,
}

impl TraversalStats {
    pub fn record_failure(&mut self, error: &FetchError) {
        *self.failures.entry(error.kind()).or_insert(0) += 1;
    }

    pub fn failed_fetches(&self) -> u64 {
        self.failures.values().sum()
    }

    /// Share of fetch attempts that returned a body, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.fetch_attempts == 0 {
            return 0.0;
        }
        let succeeded = self.fetch_attempts - self.failed_fetches();
        (succeeded as f64 / self.fetch_attempts as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `visited` - Number of addresses visited
/// * `stats` - The statistics to display
pub fn print_statistics(visited: usize, stats: &TraversalStats) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  URLs traversed: {}", visited);
    println!("  Fetch attempts: {}", stats.fetch_attempts);
    println!("  Links found: {}", stats.links_discovered);
    println!("  Links queued: {}", stats.links_admitted);
    println!("  Duplicate dequeues: {}", stats.duplicates_dequeued);
    println!();

    if !stats.failures.is_empty() {
        println!("Fetch Failures:");
        let mut failure_counts: Vec<_> = stats.failures.iter().collect();
        failure_counts.sort_by(|a, b| b.1.cmp(a.1));

        for (kind, count) in failure_counts {
            println!("  {}: {}", kind, count);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} fetches returned a page)",
        stats.success_rate(),
        stats.fetch_attempts - stats.failed_fetches(),
        stats.fetch_attempts
    );
}
