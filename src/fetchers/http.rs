use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::fetchers::{FetchedPage, Fetcher};
use reqwest::Client;

/// Fetches pages over HTTP(S) with reqwest, following redirects
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        ::log::debug!("Fetching URL: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AnalyzerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(FetchedPage::new(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&AnalyzerConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<h1>Hello</h1>")
            .create_async()
            .await;

        let page = fetcher()
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<h1>Hello</h1>");
    }

    #[tokio::test]
    async fn test_sends_configured_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "audit-bot/1.0")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let config = AnalyzerConfig {
            user_agent: "audit-bot/1.0".to_string(),
            ..AnalyzerConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        fetcher.fetch(&format!("{}/", server.url())).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Nothing listens on port 1
        let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Http(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_not_a_url() {
        let err = fetcher().fetch("definitely not a url").await.unwrap_err();
        assert_eq!(err.status_code(), None);
    }
}
