//! Entry-list source retrieval.

use crate::config::RetryConfig;
use netident_core::{NetidentError, Result};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout for a single source fetch attempt
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the raw entry list from a filesystem path or an HTTP(S) URL.
///
/// Remote fetches retry on transient 5xx statuses with exponential
/// backoff; everything else (4xx, transport errors, unreadable files)
/// fails immediately. A failed fetch is fatal for the whole run.
pub struct SourceFetcher {
    http: HttpClient,
    retry: RetryConfig,
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFetcher {
    /// Create a fetcher with the default retry policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_retry(RetryConfig::default())
    }

    /// Create a fetcher with a custom retry policy
    #[must_use]
    pub fn with_retry(retry: RetryConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("netident/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, retry }
    }

    /// Fetch raw text from a location.
    ///
    /// Detection rule: a location starting with `http` is a URL,
    /// anything else is a filesystem path.
    pub async fn fetch(&self, location: &str) -> Result<String> {
        if location.starts_with("http") {
            self.fetch_url(location).await
        } else {
            debug!(path = location, "reading entry source from file");
            Ok(std::fs::read_to_string(location)?)
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            debug!(url, attempt, "GET entry source");

            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| NetidentError::Fetch(format!("request to {url} failed: {e}")))?;

            let status = response.status();

            if status.is_success() {
                return response.text().await.map_err(|e| {
                    NetidentError::Fetch(format!("failed to read body from {url}: {e}"))
                });
            }

            if self.retry.should_retry(status.as_u16()) && attempt < self.retry.max_retries {
                let delay = self.retry.backoff_for(attempt);
                warn!(%status, attempt, ?delay, "transient status from source, backing off");
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Err(NetidentError::Fetch(format!("{url} returned HTTP {status}")));
        }
    }
}
