use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::Client;

use crate::config::HttpSettings;
use crate::errors::{StatError, StatResult};

/// Source of page bodies. The locator only ever needs whole bodies as text.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> impl Future<Output = StatResult<String>> + Send;

    /// Confirm `url` exists without downloading its body
    fn check(&mut self, url: &str) -> impl Future<Output = StatResult<()>> + Send;
}

/// reqwest-backed fetcher used by the CLI
pub struct StatClient {
    client: Client,
}

impl StatClient {
    pub fn new(settings: &HttpSettings) -> anyhow::Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> anyhow::Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> StatResult<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| StatError::transport(url, None, e.to_string()))
    }

    async fn send_head_request(&self, url: &str) -> StatResult<reqwest::Response> {
        self.client
            .head(url)
            .send()
            .await
            .map_err(|e| StatError::transport(url, None, e.to_string()))
    }

    fn check_response_status(url: &str, response: &reqwest::Response) -> StatResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(StatError::transport(
                url,
                Some(status.as_u16()),
                format!("HTTP error: {}", status),
            ));
        }
        Ok(())
    }
}

impl Fetch for StatClient {
    async fn fetch(&mut self, url: &str) -> StatResult<String> {
        debug!("GET {}", url);
        let response = self.send_get_request(url).await?;
        Self::check_response_status(url, &response)?;

        response
            .text()
            .await
            .map_err(|e| StatError::transport(url, None, e.to_string()))
    }

    async fn check(&mut self, url: &str) -> StatResult<()> {
        debug!("HEAD {}", url);
        let response = self.send_head_request(url).await?;
        Self::check_response_status(url, &response)
    }
}
