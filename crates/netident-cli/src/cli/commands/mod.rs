//! Command implementations.

pub mod bot_ranges;
pub mod config;
pub mod decode;
pub mod resolve;
pub mod rules;
pub mod subnet;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for commands that report records.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Loaded configuration file
    pub config: Config,
}
