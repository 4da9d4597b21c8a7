//! Core types and errors for the netident bulk identity resolver.
//!
//! This crate provides the foundational pieces shared by the rest of the
//! workspace:
//!
//! - **Types**: [`Entry`], [`ResolutionOutcome`], [`RegistryInfo`] and
//!   [`ResultRecord`] — the data that flows from input list to report
//! - **Errors**: [`NetidentError`] with a workspace-wide [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use netident_core::{Entry, ResolutionOutcome, ResultRecord};
//!
//! let record = ResultRecord::new(
//!     0,
//!     Entry::new("8.8.8.0/24"),
//!     ResolutionOutcome::DnsName("dns.google".into()),
//! );
//! assert_eq!(record.to_string(), "8.8.8.0/24 : dns.google");
//! ```

mod error;
pub mod types;

pub use error::{NetidentError, Result};
pub use types::*;
