//! Registry (RDAP) lookup results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal placeholder for registry fields the response did not carry
const ABSENT: &str = "None";

/// Network ownership metadata from an RDAP registry lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    /// Registry network name
    pub net_name: String,

    /// AS / organization description
    pub asn_description: String,

    /// Registry handle for the network object
    pub handle: String,
}

impl RegistryInfo {
    /// Build from optional registry fields, substituting `"None"` for
    /// anything the response omitted.
    #[must_use]
    pub fn new(
        net_name: Option<String>,
        asn_description: Option<String>,
        handle: Option<String>,
    ) -> Self {
        Self {
            net_name: net_name.unwrap_or_else(|| ABSENT.to_string()),
            asn_description: asn_description.unwrap_or_else(|| ABSENT.to_string()),
            handle: handle.unwrap_or_else(|| ABSENT.to_string()),
        }
    }
}

impl fmt::Display for RegistryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NetName: {}, {}, {}",
            self.net_name, self.asn_description, self.handle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_none_literal() {
        let info = RegistryInfo::new(Some("APNIC-LABS".into()), None, None);
        assert_eq!(info.asn_description, "None");
        assert_eq!(info.handle, "None");
        assert_eq!(info.to_string(), "NetName: APNIC-LABS, None, None");
    }
}
