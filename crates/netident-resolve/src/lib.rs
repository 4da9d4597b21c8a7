//! The netident resolution pipeline.
//!
//! Raw source text flows through [`normalize`] into an ordered entry
//! list; [`resolve_all`] fans the entries out over a bounded worker pool
//! where each one is probed by an [`IdentityResolver`] (reverse DNS
//! first, RDAP registry fallback). Failures stay with their entry; the
//! output order always matches the input order.

mod error;
pub mod normalize;
pub mod orchestrator;
pub mod resolver;
pub mod target;

pub use error::ResolveError;
pub use normalize::normalize;
pub use orchestrator::{resolve_all, DEFAULT_MAX_WORKERS};
pub use resolver::{IdentityResolver, Resolve};
pub use target::probe_target;
