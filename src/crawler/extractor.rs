//! Literal-prefix link extraction
//!
//! Links are pulled out of raw response text without any HTML model. Each
//! line is scanned twice: once for `http:` and once for `https:`. Every
//! occurrence of the prefix that is followed somewhere on the same line by a
//! double quote yields the text between the prefix and that quote. A prefix
//! with no closing quote after it ends the scan for that prefix on that line,
//! so bare URLs in visible text and single-quoted attributes are never
//! reported.
//!
//! All `http:` matches on a line come before all `https:` matches on the same
//! line, whatever their order in the text.

use std::iter::{Chain, FlatMap, FusedIterator};
use std::str::Lines;

/// Prefix scanned in the first pass over each line
pub const HTTP_PREFIX: &str = "http:";

/// Prefix scanned in the second pass over each line
pub const HTTPS_PREFIX: &str = "https:";

/// Terminator that closes a discovered link
const LINK_TERMINATOR: char = '"';

/// Lazy scan of a single line for a single literal prefix
///
/// Yields borrowed slices of the line; nothing is allocated.
#[derive(Debug, Clone)]
pub struct LinkScan<'a> {
    line: &'a str,
    prefix: &'static str,
    /// Byte offset where the next search starts, `None` once exhausted
    position: Option<usize>,
}

impl<'a> LinkScan<'a> {
    /// Creates a scan of `line` for `prefix`, starting at offset 0
    pub fn new(line: &'a str, prefix: &'static str) -> Self {
        Self {
            line,
            prefix,
            position: Some(0),
        }
    }
}

impl<'a> Iterator for LinkScan<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let from = self.position?;

        let Some(offset) = self.line[from..].find(self.prefix) else {
            self.position = None;
            return None;
        };
        let start = from + offset;

        match self.line[start..].find(LINK_TERMINATOR) {
            Some(length) => {
                let end = start + length;
                // Resume at the quote itself
                self.position = Some(end);
                Some(&self.line[start..end])
            }
            None => {
                self.position = None;
                None
            }
        }
    }
}

impl FusedIterator for LinkScan<'_> {}

/// Links found on one line: the `http:` pass followed by the `https:` pass
pub type LineLinks<'a> = Chain<LinkScan<'a>, LinkScan<'a>>;

/// Links found in a whole body, line by line
pub type BodyLinks<'a> = FlatMap<Lines<'a>, LineLinks<'a>, fn(&'a str) -> LineLinks<'a>>;

/// Scans a single line for candidate links
///
/// # Example
///
/// ```
/// use trawler::crawler::scan_line;
///
/// let links: Vec<&str> = scan_line(r#"<a href="https://b.com/y">b</a> <a href="http://a.com/x">"#).collect();
/// assert_eq!(links, vec!["http://a.com/x", "https://b.com/y"]);
/// ```
pub fn scan_line(line: &str) -> LineLinks<'_> {
    LinkScan::new(line, HTTP_PREFIX).chain(LinkScan::new(line, HTTPS_PREFIX))
}

/// Extracts candidate outbound links from a fetched page body
///
/// The returned iterator borrows `body` and does no work until polled. Calling
/// this again over the same text produces the same sequence.
///
/// # Example
///
/// ```
/// use trawler::crawler::extract_links;
///
/// let body = "<a href=\"http://a.com/x\">\nsee http://c.com for info\n";
/// let links: Vec<&str> = extract_links(body).collect();
/// assert_eq!(links, vec!["http://a.com/x"]);
/// ```
pub fn extract_links<'a>(body: &'a str) -> BodyLinks<'a> {
    body.lines().flat_map(scan_line as fn(&'a str) -> LineLinks<'a>)
}
