//! Probe-target selection.
//!
//! A bare address is probed as-is. For a subnet only one representative
//! host is probed: the first usable address. Degenerate subnets (`/31`,
//! `/32`, `/127`, `/128`) have no usable-host range, so they probe the
//! network's first address instead.

use crate::error::ResolveError;
use ipnetwork::IpNetwork;
use netident_core::Entry;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decide which single address to probe for an entry.
///
/// Deterministic: the same entry always yields the same target.
pub fn probe_target(entry: &Entry) -> Result<IpAddr, ResolveError> {
    let token = entry.as_str();

    if !entry.is_subnet() {
        return token.parse().map_err(|_| ResolveError::Parse {
            entry: token.to_string(),
            reason: "not an IPv4/IPv6 address".to_string(),
        });
    }

    let network: IpNetwork = token.parse().map_err(|e| ResolveError::Parse {
        entry: token.to_string(),
        reason: format!("invalid subnet: {e}"),
    })?;

    Ok(first_host(&network))
}

/// First usable host of a subnet (network address for degenerate prefixes)
fn first_host(network: &IpNetwork) -> IpAddr {
    match network {
        IpNetwork::V4(net) => {
            let base = u32::from(net.network());
            let host = if net.prefix() >= 31 { base } else { base + 1 };
            IpAddr::V4(Ipv4Addr::from(host))
        }
        IpNetwork::V6(net) => {
            let base = u128::from(net.network());
            let host = if net.prefix() >= 127 { base } else { base + 1 };
            IpAddr::V6(Ipv6Addr::from(host))
        }
    }
}
