use serde::Deserialize;
use std::time::Duration;

/// Browser-identifying user agent sent with every request.
///
/// Plenty of origin servers answer 403 to clients that do not look like a
/// browser, so the default mimics a desktop Chrome build.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.95 Safari/537.11";

/// Default path for both the seed list and the traversal result
pub const DEFAULT_TRAVERSED_PATH: &str = "traversedFiles.txt";

/// Main configuration structure for Trawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Visited-set cap for a crawl started from a single address
    pub interactive_cap: usize,

    /// Visited-set cap for a crawl seeded from the seed file
    pub file_cap: usize,

    /// Connection establishment timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Overall request timeout (milliseconds), unset means no limit
    pub request_timeout_ms: Option<u64>,

    /// Whether an address dequeued a second time is fetched again
    pub refetch_duplicates: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            interactive_cap: 100,
            file_cap: 1000,
            connect_timeout_ms: 5000,
            request_timeout_ms: None,
            refetch_duplicates: true,
        }
    }
}

impl CrawlerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// The full `User-Agent` header value
    pub value: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Seed source configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InputConfig {
    /// Path to the seed file, one address per line
    pub seed_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            seed_path: DEFAULT_TRAVERSED_PATH.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the traversed-address artifact, overwritten on every run
    pub traversed_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            traversed_path: DEFAULT_TRAVERSED_PATH.to_string(),
        }
    }
}
