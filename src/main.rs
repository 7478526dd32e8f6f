//! Trawler main entry point
//!
//! This is the command-line interface for the Trawler crawler.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use trawler::config::{load_config_with_hash, Config};
use trawler::crawler::{Coordinator, CrawlMode, CrawlOutcome};
use trawler::input::prompt::{read_address, read_mode};
use trawler::output::print_statistics;
use trawler::TrawlerError;
use tracing_subscriber::EnvFilter;

/// Trawler: a bounded breadth-first web crawler
///
/// Trawler follows every quoted http: and https: link it finds in page text,
/// breadth-first, until it has visited a fixed number of pages. Visited URLs
/// are written to a text file, one per line.
#[derive(Parser, Debug)]
#[command(name = "trawler")]
#[command(version = "1.0.0")]
#[command(about = "A bounded breadth-first web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Crawl mode; prompts when omitted
    #[arg(short, long, value_enum)]
    mode: Option<CrawlMode>,

    /// Starting URL for interactive mode; prompts when omitted
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Print crawl statistics when done
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => match read_mode(&mut input, &mut output)? {
            Some(mode) => mode,
            None => {
                tracing::warn!("No crawl mode selected");
                return Ok(());
            }
        },
    };

    let coordinator = Coordinator::new(config)?;

    let outcome = match mode {
        CrawlMode::Interactive => {
            let address = match cli.url {
                Some(url) => url,
                None => match read_address(&mut input, &mut output)? {
                    Some(address) => address,
                    None => {
                        tracing::warn!("No URL entered");
                        return Ok(());
                    }
                },
            };
            coordinator.crawl_address(&address).await
        }
        CrawlMode::File => match coordinator.crawl_seed_file().await {
            Ok(outcome) => outcome,
            Err(TrawlerError::Seed(e)) => {
                tracing::error!("{}; file crawl not started", e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
    };

    report(&outcome, cli.stats);
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("trawler=info,warn"),
            1 => EnvFilter::new("trawler=debug,info"),
            2 => EnvFilter::new("trawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reports the end of a crawl to the operator
fn report(outcome: &CrawlOutcome, stats: bool) {
    tracing::info!(
        "Traversed {} URLs in {:?} mode",
        outcome.visited().len(),
        outcome.mode
    );

    if let Some(e) = &outcome.persist_error {
        eprintln!("Traversed URLs were not saved: {}", e);
    }

    if stats {
        print_statistics(outcome.visited().len(), &outcome.traversal.stats);
    }
}
