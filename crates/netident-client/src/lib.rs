//! HTTP-facing clients for the netident workspace.
//!
//! - [`SourceFetcher`] retrieves the raw entry list from a local path or a
//!   remote URL, retrying transient HTTP failures with exponential backoff
//! - [`RdapClient`] looks up network ownership metadata for an IP address
//!   through an RDAP bootstrap endpoint
//! - [`BotRangeClient`] downloads the published crawler IP-range documents

pub mod bots;
pub mod config;
pub mod rdap;
pub mod source;

pub use bots::BotRangeClient;
pub use config::RetryConfig;
pub use rdap::{RdapClient, RdapIpNetwork};
pub use source::SourceFetcher;
