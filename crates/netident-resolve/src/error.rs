use thiserror::Error;

/// Errors from the resolution pipeline.
///
/// All of these stay at entry granularity: the orchestrator converts
/// them into per-entry outcomes, never into a batch abort.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// An entry is neither an IP address nor a CIDR subnet
    #[error("invalid entry {entry}: {reason}")]
    Parse {
        /// The offending token, verbatim
        entry: String,
        /// Why it did not parse
        reason: String,
    },

    /// Reverse DNS lookup failed
    #[error("DNS error: {0}")]
    Dns(String),

    /// Registry lookup failed
    #[error("registry error: {0}")]
    Registry(String),
}

impl From<ResolveError> for netident_core::NetidentError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Parse { entry, reason } => Self::Parse(format!("{entry}: {reason}")),
            ResolveError::Dns(msg) => Self::Dns(msg),
            ResolveError::Registry(msg) => Self::Registry(msg),
        }
    }
}
