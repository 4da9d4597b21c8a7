//! Entries and their resolution results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::registry::RegistryInfo;

/// One input line to resolve: a bare IPv4/IPv6 address or a CIDR subnet.
///
/// Invariant: non-empty after normalization and not a comment line. The
/// token is kept verbatim so reports echo exactly what the source listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the entry is a CIDR subnet rather than a bare address
    #[must_use]
    pub fn is_subnet(&self) -> bool {
        self.0.contains('/')
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a single probe produced. Exactly one variant per probed entry.
///
/// `RegistryFailed` and `Failed` render the same way the original surface
/// did (`WHOIS error: …` vs `Error: …`) but stay distinct so callers and
/// tests can tell a broken registry from an unparseable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Reverse DNS produced a name
    DnsName(String),

    /// DNS had no answer; the registry lookup succeeded
    Registry(RegistryInfo),

    /// DNS had no answer and the registry lookup itself failed
    RegistryFailed(String),

    /// The entry could not be probed at all (e.g. not an address or subnet)
    Failed(String),
}

impl ResolutionOutcome {
    /// Whether the probe ended in any kind of failure
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::RegistryFailed(_) | Self::Failed(_))
    }
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DnsName(name) => f.write_str(name),
            Self::Registry(info) => write!(f, "{info}"),
            Self::RegistryFailed(message) => write!(f, "WHOIS error: {message}"),
            Self::Failed(message) => write!(f, "Error: {message}"),
        }
    }
}

/// An entry paired with its outcome and its position in the input.
///
/// `index` is the entry's slot in the normalized input; reporting orders
/// by it, never by completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Position in the normalized input
    pub index: usize,

    /// The original entry, verbatim
    pub entry: Entry,

    /// What resolution produced for it
    pub outcome: ResolutionOutcome,
}

impl ResultRecord {
    /// Pair an entry with its outcome
    #[must_use]
    pub const fn new(index: usize, entry: Entry, outcome: ResolutionOutcome) -> Self {
        Self {
            index,
            entry,
            outcome,
        }
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.entry, self.outcome)
    }
}
