//! Configuration module
//!
//! Connection settings for the batch service, resolved from global flags and
//! their environment variables.

use std::time::Duration;

use anyhow::Context;
use batchrun_client::BatchClient;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_REGION: &str = "ap-northeast-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the batch service (e.g., "http://localhost:8080")
    pub endpoint: String,

    /// Region sent with every request
    pub region: String,

    /// Bearer token, if the service requires one
    pub token: Option<String>,

    /// Timeout applied to each HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a configuration with the default timeout and no token
    pub fn new(endpoint: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: region.into(),
            token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validates configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.region.trim().is_empty() {
            anyhow::bail!("region cannot be empty");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds a client for the configured service
    pub fn client(&self) -> anyhow::Result<BatchClient> {
        let http = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("failed to build HTTP client")?;

        let client = BatchClient::with_client(&self.endpoint, &self.region, http);
        Ok(match &self.token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_REGION)
    }
}
