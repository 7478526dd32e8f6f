//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use trawler::config::{Config, CrawlerConfig, UserAgentConfig};
use trawler::crawler::{Coordinator, CrawlMode, FetchError, Fetcher, HttpFetcher};
use trawler::TrawlerError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration that keeps seeds and results in `dir`
fn create_test_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.crawler.connect_timeout_ms = 1000;
    config.input.seed_path = dir.join("seeds.txt").display().to_string();
    config.output.traversed_path = dir.join("traversedFiles.txt").display().to_string();
    config
}

fn html_page(links: &[String]) -> ResponseTemplate {
    let anchors: String = links
        .iter()
        .map(|link| format!("    <a href=\"{}\">link</a>\n", link))
        .collect();
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>\n{}</body></html>\n", anchors))
        .insert_header("content-type", "text/html")
}

fn read_lines(path: &str) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_seed_with_two_links_and_self_reference() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let seed = format!("{}/", base_url);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&[
            format!("{}/one", base_url),
            format!("{}/two", base_url),
            seed.clone(),
        ]))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path());
    let output_path = config.output.traversed_path.clone();

    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let outcome = coordinator.crawl_address(&seed).await;

    assert!(outcome.is_persisted());
    assert_eq!(
        read_lines(&output_path),
        vec![seed, format!("{}/one", base_url), format!("{}/two", base_url)]
    );
    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(content.ends_with('\n'));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let user_agent = "Mozilla/5.0 (X11; Linux x86_64) TrawlerTest/1.0";

    // Only a request with the configured user agent gets the page with a link
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", user_agent))
        .respond_with(html_page(&[format!("{}/next", base_url)]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(dir.path());
    config.user_agent.value = user_agent.to_string();
    let coordinator = Coordinator::new(config).unwrap();
    let outcome = coordinator.crawl_address(&format!("{}/", base_url)).await;

    assert_eq!(outcome.visited().len(), 2);
}

#[tokio::test]
async fn test_error_status_is_absorbed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // The 500 page carries a link that must not be followed
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(format!("<a href=\"{}/hidden\">x</a>", base_url)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(html_page(&[format!("{}/leaf", base_url)]))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path());
    std::fs::write(
        &config.input.seed_path,
        format!("{}/broken\n{}/fine\n", base_url, base_url),
    )
    .unwrap();

    let coordinator = Coordinator::new(config).unwrap();
    let outcome = coordinator.crawl_seed_file().await.expect("Crawl failed");

    assert_eq!(outcome.mode, CrawlMode::File);
    assert_eq!(
        outcome.visited(),
        &[
            format!("{}/broken", base_url),
            format!("{}/fine", base_url),
            format!("{}/leaf", base_url),
        ]
    );
    let stats = &outcome.traversal.stats;
    assert_eq!(stats.failures.get("http-status"), Some(&2));
}

#[tokio::test]
async fn test_file_mode_overwrites_seed_file_with_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(html_page(&[format!("{}/found", base_url)]))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(dir.path());
    // Seeds and results share one file, the classic layout
    config.input.seed_path = config.output.traversed_path.clone();
    std::fs::write(&config.input.seed_path, format!("{}/start\n", base_url)).unwrap();
    let output_path = config.output.traversed_path.clone();

    let coordinator = Coordinator::new(config).unwrap();
    coordinator.crawl_seed_file().await.unwrap();

    assert_eq!(
        read_lines(&output_path),
        vec![format!("{}/start", base_url), format!("{}/found", base_url)]
    );
}

#[tokio::test]
async fn test_missing_seed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path());
    let output_path = config.output.traversed_path.clone();

    let coordinator = Coordinator::new(config).unwrap();
    let result = coordinator.crawl_seed_file().await;

    assert!(matches!(result, Err(TrawlerError::Seed(_))));
    assert!(!Path::new(&output_path).exists());
}

#[tokio::test]
async fn test_cap_stops_wide_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Every page links to the same ten pages
    let links: Vec<String> = (0..10).map(|i| format!("{}/p{}", base_url, i)).collect();
    Mock::given(method("GET"))
        .respond_with(html_page(&links))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(dir.path());
    config.crawler.interactive_cap = 4;
    let output_path = config.output.traversed_path.clone();

    let coordinator = Coordinator::new(config).unwrap();
    let outcome = coordinator.crawl_address(&format!("{}/", base_url)).await;

    assert_eq!(outcome.visited().len(), 4);
    let lines = read_lines(&output_path);
    assert_eq!(lines.len(), 4);
    let mut unique = lines.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), lines.len());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<a href=\"http://never.example/\">")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let crawler = CrawlerConfig {
        connect_timeout_ms: 200,
        request_timeout_ms: Some(500),
        ..CrawlerConfig::default()
    };
    let fetcher = HttpFetcher::new(&crawler, &UserAgentConfig::default()).unwrap();

    let result = fetcher.fetch(&format!("{}/slow", mock_server.uri())).await;
    assert_eq!(result, Err(FetchError::Timeout));
}

#[tokio::test]
async fn test_unreachable_host_fails_fast() {
    let fetcher =
        HttpFetcher::new(&CrawlerConfig::default(), &UserAgentConfig::default()).unwrap();

    // Nothing listens on port 1
    let result = fetcher.fetch("http://127.0.0.1:1/").await;
    assert!(matches!(
        result,
        Err(FetchError::ConnectionRefused) | Err(FetchError::Timeout)
    ));
}
