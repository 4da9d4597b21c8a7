//! RDAP registry lookups for IP networks.
//!
//! Queries go to an RDAP bootstrap endpoint which redirects to the
//! authoritative RIR (ARIN, RIPE, APNIC, ...); the redirect hop is the
//! only delegation followed.

use netident_core::{NetidentError, RegistryInfo, Result};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// The RDAP bootstrap endpoint
const DEFAULT_BASE_URL: &str = "https://rdap.org";

/// Conservative per-lookup timeout so one slow registry cannot starve the
/// worker pool
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// RDAP client for IP network ownership lookups
pub struct RdapClient {
    http: HttpClient,
    base_url: String,
}

impl Default for RdapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RdapClient {
    /// Create a client with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> RdapClientBuilder {
        RdapClientBuilder::new()
    }

    /// Look up the registered network for an IP address
    pub async fn lookup_ip(&self, ip: IpAddr) -> Result<RdapIpNetwork> {
        let url = format!("{}/ip/{ip}", self.base_url);
        debug!(url = %url, "RDAP lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| NetidentError::Registry(format!("request to registry failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetidentError::Registry(format!(
                "registry returned HTTP {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            NetidentError::Registry(format!("failed to read registry response: {e}"))
        })?;

        serde_json::from_str(&body)
            .map_err(|e| NetidentError::Registry(format!("malformed registry response: {e}")))
    }
}

/// Builder for configuring an [`RdapClient`]
pub struct RdapClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for RdapClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RdapClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-lookup timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> RdapClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(concat!("netident/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        RdapClient {
            http,
            base_url: self.base_url,
        }
    }
}

/// An RDAP IP network object, reduced to the fields netident reports
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapIpNetwork {
    /// Registry handle for the network
    pub handle: Option<String>,

    /// Registered network name
    pub name: Option<String>,

    /// First address of the registered range
    pub start_address: Option<String>,

    /// Last address of the registered range
    pub end_address: Option<String>,

    /// Country code, where the registry publishes one
    pub country: Option<String>,

    /// Entities attached to the network (registrant, abuse contact, ...)
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
}

/// An RDAP entity with its vCard payload
#[derive(Debug, Clone, Deserialize)]
pub struct RdapEntity {
    /// Entity handle
    pub handle: Option<String>,

    /// Roles this entity plays for the network
    #[serde(default)]
    pub roles: Vec<String>,

    /// jCard payload: `["vcard", [[name, params, type, value], ...]]`
    #[serde(rename = "vcardArray")]
    pub vcard_array: Option<serde_json::Value>,

    /// Nested entities (one delegation hop)
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
}

impl RdapEntity {
    /// The `fn` (formatted name) property of the entity's vCard, if any
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        let properties = self.vcard_array.as_ref()?.get(1)?.as_array()?;

        properties.iter().find_map(|property| {
            let items = property.as_array()?;
            if items.first()?.as_str()? != "fn" {
                return None;
            }
            let value = items.get(3)?.as_str()?;
            (!value.is_empty()).then(|| value.to_string())
        })
    }
}

impl RdapIpNetwork {
    /// Name of the registrant entity, falling back to the first named
    /// entity at most one hop deep.
    #[must_use]
    pub fn registrant_name(&self) -> Option<String> {
        let registrant = self
            .entities
            .iter()
            .find(|e| e.roles.iter().any(|r| r == "registrant"))
            .and_then(RdapEntity::full_name);
        if registrant.is_some() {
            return registrant;
        }

        self.entities.iter().find_map(|entity| {
            entity
                .full_name()
                .or_else(|| entity.entities.iter().find_map(RdapEntity::full_name))
        })
    }

    /// Collapse into the reportable registry fields.
    ///
    /// The RDAP network object carries no AS description of its own, so
    /// the registrant's name stands in for it; absent fields become the
    /// literal `"None"`.
    #[must_use]
    pub fn into_registry_info(self) -> RegistryInfo {
        let asn_description = self.registrant_name();
        RegistryInfo::new(self.name, asn_description, self.handle)
    }
}
