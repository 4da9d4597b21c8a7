//! netident - bulk network-identity resolver.
//!
//! Resolve lists of IPs and subnets to their owners.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    netident_cli::run().await
}
