//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with a browser-identifying user agent
//! - Enforcing the connect timeout so one dead host cannot stall a crawl
//! - Classifying failures into a typed `FetchError`

use crate::config::{CrawlerConfig, UserAgentConfig};
use reqwest::Client;
use std::future::Future;
use thiserror::Error;
use url::Url;

/// Why a fetch produced no body
///
/// The traversal treats every variant the same way (no links discovered), the
/// distinction only feeds logging and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("connection refused")]
    ConnectionRefused,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl FetchError {
    /// Short stable label used as a statistics key
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout => "timeout",
            FetchError::ConnectionRefused => "connection-refused",
            FetchError::Status(_) => "http-status",
            FetchError::InvalidAddress(_) => "invalid-address",
            FetchError::Io(_) => "io-error",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::ConnectionRefused
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Io(e.to_string())
        }
    }
}

/// Source of page bodies for the traversal
///
/// The traversal only needs "address in, text or failure out", so tests can
/// swap the network for canned pages.
pub trait Fetcher {
    /// Fetches `address` and returns the response body as text
    fn fetch(&self, address: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `crawler` - Timeouts
/// * `user_agent` - The `User-Agent` header to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use trawler::config::{CrawlerConfig, UserAgentConfig};
/// use trawler::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(user_agent.value.as_str())
        .connect_timeout(crawler.connect_timeout())
        .gzip(true)
        .brotli(true);

    if let Some(timeout) = crawler.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the crawler and user agent settings
    pub fn new(crawler: &CrawlerConfig, user_agent: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(crawler, user_agent)?))
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    /// Sends a GET request for `address`
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Address does not parse as a URL | `InvalidAddress`, no request sent |
    /// | Connect or request timeout | `Timeout` |
    /// | Connection cannot be established | `ConnectionRefused` |
    /// | Non-2xx status (after redirects) | `Status` |
    /// | Body cannot be read | `Io` |
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let url = Url::parse(address)
            .map_err(|e| FetchError::InvalidAddress(format!("{}: {}", address, e)))?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
