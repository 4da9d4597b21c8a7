//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bulk network-identity resolver
///
/// Resolve lists of IPs and subnets to their owners (reverse DNS with a
/// WHOIS/RDAP fallback), inspect subnets, decode request payloads and
/// snapshot the published crawler ranges.
#[derive(Parser, Debug)]
#[command(name = "netident")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (RUST_LOG overrides the default filter)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every IP or subnet in a list to its owner
    Resolve(ResolveArgs),

    /// Inspect a CIDR subnet and check whether an IP belongs to it
    Subnet(SubnetArgs),

    /// Decode or encode request payloads (base64, URL, hex)
    Decode(DecodeArgs),

    /// Download the published crawler IP ranges into a file
    BotRanges(BotRangesArgs),

    /// Search ModSecurity rule files and print matching blocks highlighted
    Rules(RulesArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Resolve command
// ============================================================================

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Entry list location: a file path or an http(s) URL
    pub source: String,

    /// Maximum concurrent resolutions
    #[arg(short = 'w', long, env = "NETIDENT_MAX_WORKERS")]
    pub max_workers: Option<usize>,

    /// Retries for transient source-fetch failures (500/502/503/504)
    #[arg(long)]
    pub retries: Option<u32>,
}

// ============================================================================
// Subnet command
// ============================================================================

#[derive(Args, Debug)]
pub struct SubnetArgs {
    /// Subnet in CIDR notation (e.g. 192.168.0.0/24)
    pub cidr: String,

    /// IP address to locate within the subnet
    pub ip: String,
}

// ============================================================================
// Decode command
// ============================================================================

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Transformation to apply
    #[arg(value_enum)]
    pub method: DecodeMethod,

    /// Data to transform (read from stdin when omitted)
    pub data: Option<String>,
}

/// Payload transformations
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMethod {
    /// Base64 decode
    B64,
    /// Base64 encode
    B64e,
    /// URL decode
    Url,
    /// URL encode
    Urle,
    /// Byte-string (\xNN) decode
    Byte,
    /// PHP hex blob decode
    Phphex,
}

// ============================================================================
// Bot-ranges command
// ============================================================================

#[derive(Args, Debug)]
pub struct BotRangesArgs {
    /// File the sorted range list is written to
    #[arg(long, default_value = "bot_ip_ranges.data")]
    pub out: PathBuf,
}

// ============================================================================
// Rules command
// ============================================================================

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Regex to search rule blocks for
    pub pattern: String,

    /// Directory containing the .conf rule files
    #[arg(short, long, default_value = "raw_rules")]
    pub dir: PathBuf,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (max_workers, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
