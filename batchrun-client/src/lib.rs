//! Batchrun HTTP Client
//!
//! A small, type-safe HTTP client for the remote job-execution service.
//!
//! The [`JobService`] trait is the seam the CLI's submission workflow and
//! status poller are written against; [`BatchClient`] is its HTTP
//! implementation.
//!
//! # Example
//!
//! ```no_run
//! use batchrun_client::{BatchClient, JobService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BatchClient::new("http://localhost:8080", "ap-northeast-1");
//!
//!     let job = client.submit_job("nightly-etl", "etl:3", "batch-default").await?;
//!     let status = client.fetch_job_status(&job.id).await?;
//!
//!     println!("{} is {}", job.id, status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod definitions;
mod jobs;
mod queues;
mod service;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use service::JobService;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Header carrying the region every request is scoped to
pub const REGION_HEADER: &str = "X-Batch-Region";

/// HTTP client for the job service API
///
/// Endpoints are grouped by resource:
/// - Jobs (submit, describe)
/// - Job definitions (describe one revision, list active)
/// - Job queues (describe, list)
#[derive(Debug, Clone)]
pub struct BatchClient {
    /// Base URL of the service (e.g., "http://localhost:8080")
    base_url: String,
    /// Region sent with every request
    region: String,
    /// Optional bearer token
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl BatchClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the job service (e.g., "http://localhost:8080")
    /// * `region` - Region the requests are scoped to
    ///
    /// # Example
    /// ```
    /// use batchrun_client::BatchClient;
    ///
    /// let client = BatchClient::new("http://localhost:8080", "ap-northeast-1");
    /// ```
    pub fn new(base_url: impl Into<String>, region: impl Into<String>) -> Self {
        Self::with_client(base_url, region, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use batchrun_client::BatchClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BatchClient::with_client("http://localhost:8080", "us-east-1", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        region: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            region: region.into(),
            token: None,
            client,
        }
    }

    /// Attach a bearer token sent with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the region requests are scoped to
    pub fn region(&self) -> &str {
        &self.region
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(REGION_HEADER, &self.region);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
