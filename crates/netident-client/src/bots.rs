//! Published crawler IP-range documents.
//!
//! Google and Bing publish the address ranges their crawlers operate
//! from as JSON documents of the form
//! `{ "prefixes": [ { "ipv4Prefix": ... } | { "ipv6Prefix": ... } ] }`.

use netident_core::{NetidentError, Result};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

/// The crawler range documents fetched by default
pub const BOT_RANGE_SOURCES: &[(&str, &str)] = &[
    (
        "google-bot",
        "https://developers.google.com/static/search/apis/ipranges/googlebot.json",
    ),
    (
        "google-special",
        "https://developers.google.com/static/search/apis/ipranges/special-crawlers.json",
    ),
    (
        "google-users",
        "https://developers.google.com/static/search/apis/ipranges/user-triggered-fetchers.json",
    ),
    ("bing-bot", "https://www.bing.com/toolbox/bingbot.json"),
];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One crawler range document
#[derive(Debug, Clone, Deserialize)]
pub struct RangeDocument {
    /// Published prefixes; either address family per element
    #[serde(default)]
    pub prefixes: Vec<RangePrefix>,
}

/// A single published prefix, IPv4 or IPv6
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangePrefix {
    /// IPv4 CIDR, when present
    pub ipv4_prefix: Option<String>,

    /// IPv6 CIDR, when present
    pub ipv6_prefix: Option<String>,
}

impl RangeDocument {
    /// All prefixes in the document, both address families
    #[must_use]
    pub fn networks(&self) -> Vec<String> {
        self.prefixes
            .iter()
            .flat_map(|p| [p.ipv4_prefix.clone(), p.ipv6_prefix.clone()])
            .flatten()
            .collect()
    }
}

/// Downloads crawler range documents and collects their prefixes
pub struct BotRangeClient {
    http: HttpClient,
}

impl Default for BotRangeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BotRangeClient {
    /// Create a client with default settings
    #[must_use]
    pub fn new() -> Self {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("netident/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }

    /// Fetch all default sources; returns the sorted, de-duplicated
    /// prefix list. Any source failing is fatal for the whole fetch.
    pub async fn fetch_default(&self) -> Result<Vec<String>> {
        self.fetch(BOT_RANGE_SOURCES).await
    }

    /// Fetch a specific set of `(name, url)` sources
    pub async fn fetch(&self, sources: &[(&str, &str)]) -> Result<Vec<String>> {
        let mut ranges = BTreeSet::new();

        for (name, url) in sources {
            debug!(source = name, url, "fetching crawler ranges");

            let response = self.http.get(*url).send().await.map_err(|e| {
                NetidentError::Fetch(format!("error fetching {name} ranges from {url}: {e}"))
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(NetidentError::Fetch(format!(
                    "{name} ranges endpoint returned HTTP {status}"
                )));
            }

            let document: RangeDocument = response.json().await.map_err(|e| {
                NetidentError::Fetch(format!("error processing {name} ranges: {e}"))
            })?;

            ranges.extend(document.networks());
        }

        Ok(ranges.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_document_collects_both_families() {
        let document: RangeDocument = serde_json::from_value(serde_json::json!({
            "creationTime": "2026-07-30T23:00:00.000000",
            "prefixes": [
                { "ipv4Prefix": "66.249.64.0/27" },
                { "ipv6Prefix": "2001:4860:4801:10::/64" },
                { "ipv4Prefix": "66.249.64.32/27" }
            ]
        }))
        .unwrap();

        assert_eq!(
            document.networks(),
            vec![
                "66.249.64.0/27",
                "2001:4860:4801:10::/64",
                "66.249.64.32/27"
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_merges_sorts_and_dedups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "prefixes": [
                    { "ipv4Prefix": "66.249.64.0/27" },
                    { "ipv4Prefix": "40.77.167.0/24" }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "prefixes": [
                    { "ipv4Prefix": "66.249.64.0/27" },
                    { "ipv6Prefix": "2001:4860::/32" }
                ]
            })))
            .mount(&server)
            .await;

        let a = format!("{}/a.json", server.uri());
        let b = format!("{}/b.json", server.uri());
        let client = BotRangeClient::new();
        let ranges = client
            .fetch(&[("a", a.as_str()), ("b", b.as_str())])
            .await
            .unwrap();

        assert_eq!(
            ranges,
            vec!["2001:4860::/32", "40.77.167.0/24", "66.249.64.0/27"]
        );
    }

    #[tokio::test]
    async fn test_fetch_fails_fast_on_broken_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let url = format!("{}/broken.json", server.uri());
        let client = BotRangeClient::new();
        let err = client.fetch(&[("broken", url.as_str())]).await.unwrap_err();
        assert!(matches!(err, NetidentError::Fetch(_)));
    }
}
