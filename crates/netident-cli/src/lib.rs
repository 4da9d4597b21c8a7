//! # netident-cli
//!
//! Command-line interface for the netident workspace.
//!
//! ## Subcommands
//!
//! - **resolve**: bulk owner resolution for an IP/subnet list (reverse
//!   DNS with RDAP fallback, bounded concurrency, ordered output)
//! - **subnet**: inspect a CIDR range and locate an IP inside it
//! - **decode**: base64/URL/hex payload transforms for log triage
//! - **bot-ranges**: snapshot the published crawler IP ranges
//! - **rules**: search and highlight ModSecurity rule blocks
//! - **config**: manage the configuration file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
