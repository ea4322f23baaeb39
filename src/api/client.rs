//! HTTP transport for the analysis service
//!
//! One POST per submission. There is no retry and no in-flight
//! deduplication; the only time limit is the client timeout taken from
//! configuration.

use crate::api::models::{AnalysisRequest, AnalysisResult, RobotsSource};
use crate::config::ApiConfig;
use crate::{CheckerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Sends analysis requests to the service
///
/// The controller only talks to the network through this trait so tests
/// can substitute a fake.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Submits one request and returns the decoded result
    ///
    /// Non-2xx responses map to `CheckerError::Http`, connection problems
    /// to `CheckerError::Transport` and unreadable bodies to
    /// `CheckerError::Decode`.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// reqwest-backed transport posting JSON to `{base_url}/analyze`
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    /// Builds a client for the configured service
    ///
    /// # Example
    ///
    /// ```no_run
    /// use robots_checker::config::ApiConfig;
    /// use robots_checker::api::HttpAnalysisClient;
    ///
    /// let client = HttpAnalysisClient::new(&ApiConfig::default()).unwrap();
    /// assert_eq!(client.endpoint(), "http://localhost:8000/analyze");
    /// ```
    pub fn new(config: &ApiConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("robots-checker/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.analyze_endpoint(),
        })
    }

    /// The full analysis URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let source_kind = match request.source {
            RobotsSource::Url(_) => "url",
            RobotsSource::Content(_) => "content",
        };
        tracing::debug!(
            endpoint = %self.endpoint,
            source = source_kind,
            user_agents = request.user_agents.len(),
            test_paths = request.test_paths.len(),
            "Posting analysis request"
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Analysis service answered {}", status);
            return Err(CheckerError::Http {
                status: status.as_u16(),
            });
        }

        // Decode separately so malformed bodies surface as Decode errors
        let body = response.text().await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        tracing::info!(
            "Analysis complete: status {} ({} test results, {} groups, {} warnings)",
            result.status.code,
            result.test_results.len(),
            result.groups.len(),
            result.warnings.len()
        );

        Ok(result)
    }
}
