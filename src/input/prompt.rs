//! Operator prompts
//!
//! Generic over the reader and writer so the binary can use stdin/stdout and
//! tests can use in-memory buffers.

use crate::crawler::CrawlMode;
use std::io::{self, BufRead, Write};

pub const MODE_PROMPT: &str = "Press 'c' for manual URL crawl mode; f for file URL crawl mode: ";
pub const ADDRESS_PROMPT: &str = "Enter a URL: ";

/// Maps an operator answer to a crawl mode by its first character
pub fn parse_mode(answer: &str) -> Option<CrawlMode> {
    match answer.chars().next()? {
        'c' => Some(CrawlMode::Interactive),
        'f' => Some(CrawlMode::File),
        _ => None,
    }
}

/// Asks for the crawl mode
///
/// Returns `Ok(None)` on end of input or an answer that selects no mode.
pub fn read_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<CrawlMode>> {
    Ok(ask(input, output, MODE_PROMPT)?.as_deref().and_then(parse_mode))
}

/// Asks for the starting address
///
/// The answer is returned verbatim without its line terminator. Returns
/// `Ok(None)` on end of input.
pub fn read_address<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    ask(input, output, ADDRESS_PROMPT)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
