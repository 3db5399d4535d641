//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::FetchError;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and return the body of a 2xx response as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for [`ReqwestClient`].
#[derive(Debug, Clone)]
pub struct ReqwestClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for ReqwestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: concat!("larder/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(ReqwestClient { inner })
    }
}

/// Production client. No caching, no retries: one request per call.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let host = parsed.host_str().unwrap_or("").to_string();

        let response = self.inner.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                FetchError::Transport(e.to_string())
            } else {
                FetchError::RequestFailed(e)
            }
        })?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(host = %host, status = %status, "network: request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: format!("{}{}", host, response.url().path()),
            });
        }

        tracing::debug!(host = %host, status = %status, "network: fetched successfully");
        response
            .text()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}

/// Mock response for testing.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    /// Fails as [`FetchError::Transport`].
    Error(String),
}

/// Mock HTTP client for testing. Records every URL it is asked for.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a 200 response with the given body.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(body.to_string()))
    }

    /// Add a non-success status response.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            Some(MockResponse::Error(e)) => Err(FetchError::Transport(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_returns_body_and_records() {
        let client = MockClient::new().with_body("https://example.com/a", "hello");
        assert_eq!(
            client.fetch_text("https://example.com/a").await.unwrap(),
            "hello"
        );
        assert!(client.fetch_text("https://example.com/b").await.is_err());
        assert_eq!(
            client.requests(),
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[tokio::test]
    async fn test_mock_client_status() {
        let client = MockClient::new().with_status("https://example.com/a", 402);
        match client.fetch_text("https://example.com/a").await {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 402),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_client_error_is_transport_failure() {
        let client = MockClient::new().with_error("https://example.com/a", "connection reset");
        match client.fetch_text("https://example.com/a").await {
            Err(FetchError::Transport(msg)) => assert_eq!(msg, "connection reset"),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reqwest_client_rejects_invalid_url() {
        let client = ReqwestClient::builder().build().unwrap();
        assert!(matches!(
            client.fetch_text("not a url").await,
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
