use thiserror::Error;

/// Result type alias for netident operations
pub type Result<T> = std::result::Result<T, NetidentError>;

/// Errors that can occur while resolving an entry list
#[derive(Error, Debug)]
pub enum NetidentError {
    /// The entry source (file or URL) could not be fetched.
    ///
    /// Fatal: the run aborts before any resolution begins.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Local file I/O failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry is not a valid IP address or CIDR subnet
    #[error("invalid entry: {0}")]
    Parse(String),

    /// DNS resolution failed
    #[error("DNS error: {0}")]
    Dns(String),

    /// Registry (RDAP) lookup failed
    #[error("registry error: {0}")]
    Registry(String),

    /// Configuration is invalid or unreadable
    #[error("config error: {0}")]
    Config(String),
}

impl NetidentError {
    /// Returns true if the error aborts a whole run rather than a single entry
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Io(_) | Self::Config(_))
    }
}
