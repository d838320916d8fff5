// Re-export modules
pub mod clipboard;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetchers;
pub mod parsers;
pub mod report;
pub mod results;
pub mod sources;
pub mod tree;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};
pub use parsers::keywords::KeywordSpec;
pub use results::{BatchResult, HeadingLevel, HeadingNode, Notice, PageAnalysis, PageReport};
pub use tree::render_tree;

use fetchers::{Fetcher, HttpFetcher};
use parsers::keywords::KeywordMatcher;

/// Main builder for a batch heading audit
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    keywords: KeywordSpec,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            keywords: KeywordSpec::default(),
        }
    }

    /// Set the keywords counted on every page
    pub fn with_keywords(mut self, keywords: KeywordSpec) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch and analyze `urls` over HTTP
    pub async fn run(&self, urls: &[String]) -> Result<BatchResult> {
        let fetcher = HttpFetcher::new(&self.config)?;
        self.run_with(&fetcher, urls).await
    }

    /// Fetch and analyze `urls` one after another using `fetcher`.
    ///
    /// Each unique URL is fetched exactly once, in order. Per-URL failures
    /// end up as degraded reports plus notices; the batch always completes.
    pub async fn run_with<F: Fetcher>(&self, fetcher: &F, urls: &[String]) -> Result<BatchResult> {
        let matcher = KeywordMatcher::new(&self.keywords)?;
        let mut batch = BatchResult {
            keyword_columns: self.keywords.keywords().to_vec(),
            ..BatchResult::default()
        };

        let urls = sources::dedupe(urls.iter().cloned());
        if urls.is_empty() {
            ::log::warn!("No URLs to analyze");
            batch.notices.push(Notice::warning(
                "Please enter at least one URL or supply a valid spreadsheet.",
            ));
            return Ok(batch);
        }

        ::log::info!("Analyzing {} URLs", urls.len());
        if self.keywords.is_enabled() {
            ::log::info!("Counting keywords: {}", self.keywords.keywords().join(", "));
        }
        let start_time = std::time::Instant::now();

        for url in &urls {
            let (analysis, notice) = extractor::extract(fetcher, url, &matcher).await;
            batch.pages.push(analysis);
            batch.notices.extend(notice);
        }

        ::log::info!(
            "Analyzed {} pages in {:.2} seconds",
            batch.pages.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fetchers::FetchedPage;
    use std::sync::Mutex;

    /// Records every requested URL and fails anything under `down.`
    #[derive(Default)]
    struct RecordingFetcher {
        requested: Mutex<Vec<String>>,
    }

    impl Fetcher for RecordingFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            self.requested.lock().unwrap().push(url.to_string());
            if url.contains("down.") {
                return Err(AnalyzerError::Status {
                    url: url.to_string(),
                    status: 503,
                });
            }
            let body = format!(
                "<title>{url}</title><h2>Intro</h2><h3>Sub</h3><h1>Title</h1><p>seo seo-tools</p>"
            );
            Ok(FetchedPage::new(200, body))
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    #[tokio::test]
    async fn test_sequential_fetch_once_per_url() {
        let fetcher = RecordingFetcher::default();
        let batch = Analyzer::default()
            .run_with(
                &fetcher,
                &urls(&["https://a.example", "https://b.example", "https://a.example"]),
            )
            .await
            .unwrap();

        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            urls(&["https://a.example", "https://b.example"])
        );
        assert_eq!(batch.pages.len(), 2);
        assert!(batch.notices.is_empty());
        assert_eq!(
            batch.tree_for("https://b.example").as_deref(),
            Some("  - H2: Intro\n    - H3: Sub\n- H1: Title\n")
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let fetcher = RecordingFetcher::default();
        let batch = Analyzer::default()
            .run_with(
                &fetcher,
                &urls(&["https://down.example", "https://up.example"]),
            )
            .await
            .unwrap();

        assert_eq!(batch.pages.len(), 2);
        assert_eq!(batch.pages[0].report.title, "Error");
        assert_eq!(batch.pages[0].report.http_status, 503);
        assert_eq!(batch.pages[1].report.total_headings, 3);
        assert_eq!(batch.notices.len(), 1);
    }

    #[tokio::test]
    async fn test_no_urls_is_a_warning() {
        let fetcher = RecordingFetcher::default();
        let batch = Analyzer::default().run_with(&fetcher, &[]).await.unwrap();

        assert!(fetcher.requested.lock().unwrap().is_empty());
        assert!(batch.pages.is_empty());
        assert_eq!(batch.notices.len(), 1);
        assert_eq!(batch.notices[0].severity, results::Severity::Warning);
    }

    #[tokio::test]
    async fn test_keyword_columns() {
        let fetcher = RecordingFetcher::default();
        let analyzer =
            Analyzer::default().with_keywords(KeywordSpec::from_lines(["SEO", "missing"]));
        let batch = analyzer
            .run_with(&fetcher, &urls(&["https://a.example", "https://down.example"]))
            .await
            .unwrap();

        assert_eq!(batch.keyword_columns, vec!["SEO", "missing"]);
        let ok = &batch.pages[0].report;
        assert_eq!(ok.keyword_count("SEO"), Some(1));
        assert_eq!(ok.keyword_count("missing"), Some(0));
        assert!(batch.pages[1].report.keyword_counts.is_empty());
    }

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).with_timeout(3);
        assert_eq!(analyzer.config().timeout_secs, 3);
    }
}
