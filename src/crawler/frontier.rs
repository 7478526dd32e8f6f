//! Frontier and traversal loop
//!
//! This module owns the breadth-first walk:
//! - FIFO queue of pending addresses
//! - Insertion-ordered visited set, unique by exact string equality
//! - The visited-count cap
//! - Admission of newly discovered links
//!
//! Admission only checks the visited set. An address may sit in the queue
//! several times when two pages link to it before it is dequeued; the second
//! dequeue is counted as a duplicate and, under `DuplicatePolicy::Refetch`,
//! fetched again without being recorded again.

use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::Fetcher;
use crate::output::TraversalStats;
use std::collections::{HashSet, VecDeque};

/// What happens when an already visited address reaches the head of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fetch and scan it again, do not record it again
    #[default]
    Refetch,

    /// Drop it without fetching
    Skip,
}

/// Limits for one traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraverseOptions {
    /// Maximum size of the visited set
    pub cap: usize,

    /// Handling of duplicate dequeues
    pub duplicates: DuplicatePolicy,
}

impl TraverseOptions {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Result of one traversal
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    /// Visited addresses in visitation order
    pub visited: Vec<String>,

    /// Counters collected along the way
    pub stats: TraversalStats,
}

/// Pending queue plus visited set for a single traversal
#[derive(Debug, Default)]
pub struct Frontier {
    pending: VecDeque<String>,
    visited: Vec<String>,
    visited_index: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding `seeds` in the given order, nothing visited
    pub fn new<I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            pending: seeds.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Removes the head of the queue
    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    pub fn is_visited(&self, address: &str) -> bool {
        self.visited_index.contains(address)
    }

    /// Records `address` as visited
    ///
    /// Returns `false` when it was already recorded.
    pub fn record(&mut self, address: &str) -> bool {
        if self.visited_index.contains(address) {
            return false;
        }
        self.visited_index.insert(address.to_string());
        self.visited.push(address.to_string());
        true
    }

    /// Appends a discovered address to the tail of the queue unless already visited
    ///
    /// Addresses already pending are not checked.
    pub fn admit(&mut self, address: &str) -> bool {
        if self.is_visited(address) {
            return false;
        }
        self.pending.push_back(address.to_string());
        true
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Consumes the frontier, returning the visited addresses in visitation order
    pub fn into_visited(self) -> Vec<String> {
        self.visited
    }
}

/// Runs a breadth-first traversal from `seeds`
///
/// # Loop
///
/// While the queue is non-empty and fewer than `cap` addresses are visited:
/// 1. Pop the head of the queue
/// 2. Record it if not yet visited (duplicates follow `options.duplicates`)
/// 3. Fetch it; a failure of any kind counts as a page with no links
/// 4. Append every extracted link not yet visited to the tail of the queue
///
/// Fetches never abort the traversal. The returned list never holds more than
/// `cap` addresses and never holds the same address twice.
///
/// # Example
///
/// ```no_run
/// use trawler::config::{CrawlerConfig, UserAgentConfig};
/// use trawler::crawler::{traverse, HttpFetcher, TraverseOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(&CrawlerConfig::default(), &UserAgentConfig::default())?;
/// let seeds = vec!["https://news.ycombinator.com/".to_string()];
/// let traversal = traverse(&fetcher, seeds, TraverseOptions::new(100)).await;
/// println!("visited {} pages", traversal.visited.len());
/// # Ok(())
/// # }
/// ```
pub async fn traverse<F, I>(fetcher: &F, seeds: I, options: TraverseOptions) -> Traversal
where
    F: Fetcher,
    I: IntoIterator<Item = String>,
{
    let mut frontier = Frontier::new(seeds);
    let mut stats = TraversalStats::default();

    tracing::debug!(
        "Starting traversal with {} seeds, cap {}",
        frontier.pending_len(),
        options.cap
    );

    while frontier.visited_len() < options.cap {
        let Some(current) = frontier.pop() else {
            tracing::debug!("Frontier is empty");
            break;
        };

        if frontier.record(&current) {
            tracing::info!("Crawl: {}", current);
        } else {
            stats.duplicates_dequeued += 1;
            if options.duplicates == DuplicatePolicy::Skip {
                tracing::trace!("Skipping already visited {}", current);
                continue;
            }
            tracing::debug!("Re-fetching already visited {}", current);
        }

        stats.fetch_attempts += 1;
        let body = match fetcher.fetch(&current).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Fetch failed for {}: {}", current, e);
                stats.record_failure(&e);
                continue;
            }
        };

        for link in extract_links(&body) {
            stats.links_discovered += 1;
            if frontier.admit(link) {
                stats.links_admitted += 1;
            }
        }
    }

    tracing::info!(
        "Finished crawling. Traversed {} URLs, {} still pending",
        frontier.visited_len(),
        frontier.pending_len()
    );

    Traversal {
        visited: frontier.into_visited(),
        stats,
    }
}
