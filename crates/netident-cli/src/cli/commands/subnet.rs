//! `netident subnet` - inspect a CIDR range and locate an IP inside it.

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

use crate::cli::args::SubnetArgs;

pub fn execute(args: &SubnetArgs) -> Result<()> {
    let network: Ipv4Network = args
        .cidr
        .parse()
        .map_err(|e| anyhow!("Invalid CIDR notation: {e}"))?;

    // Strict form: the address part must be the network address itself.
    if network.ip() != network.network() {
        bail!(
            "Invalid CIDR notation: {} has host bits set (network address is {})",
            args.cidr,
            network.network()
        );
    }

    let ip: Ipv4Addr = args
        .ip
        .parse()
        .map_err(|e| anyhow!("Invalid IP address: {e}"))?;

    println!("\nEnumerating IPs for: {}", args.cidr);
    println!(
        "First IP: {}, Last IP: {}",
        network.network(),
        network.broadcast()
    );

    match neighborhood(network, ip) {
        Some(window) => {
            for addr in window {
                if addr == ip {
                    println!("{}", format!("-> {addr}").yellow());
                } else {
                    println!("{addr}");
                }
            }
        }
        None => println!("{ip} is NOT in the range"),
    }

    if network.contains(ip) {
        println!(
            "\n{}",
            format!("The IP {ip} IS included in {}.", args.cidr).green()
        );
    } else {
        println!(
            "\n{}",
            format!("The IP {ip} is NOT included in {}.", args.cidr).red()
        );
    }

    println!("\nNetwork Address: {}", network.network());
    println!("Broadcast Address: {}", network.broadcast());
    println!("{}", mask_explanation(network));

    Ok(())
}

/// The target with up to two neighbors on each side, clamped to the
/// range; `None` when the target lies outside the subnet.
fn neighborhood(network: Ipv4Network, target: Ipv4Addr) -> Option<Vec<Ipv4Addr>> {
    if !network.contains(target) {
        return None;
    }

    let first = u32::from(network.network());
    let last = u32::from(network.broadcast());
    let ip = u32::from(target);

    let start = ip.saturating_sub(2).max(first);
    let end = ip.saturating_add(2).min(last);

    Some((start..=end).map(Ipv4Addr::from).collect())
}

/// Human explanation of what a mask allocates
fn mask_explanation(network: Ipv4Network) -> String {
    let prefix = network.prefix();
    let total = 1u64 << (32 - u32::from(prefix));
    // /31 and /32 have no network/broadcast reservation.
    let usable = if prefix <= 30 { total - 2 } else { total };
    format!("Mask /{prefix}: Allocates {usable} usable IPs out of {total} total IPs.")
}
