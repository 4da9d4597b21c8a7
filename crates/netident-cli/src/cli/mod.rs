//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        init_tracing();
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format: flag, then config file, then pretty
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    let ctx = commands::Context {
        output_format,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Resolve(cmd) => commands::resolve::execute(ctx, cmd).await,
        Commands::Subnet(cmd) => commands::subnet::execute(&cmd),
        Commands::Decode(cmd) => commands::decode::execute(&cmd),
        Commands::BotRanges(cmd) => commands::bot_ranges::execute(&cmd).await,
        Commands::Rules(cmd) => commands::rules::execute(&cmd),
        Commands::Config(cmd) => commands::config::execute(cmd),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("netident_cli=debug,netident_client=debug,netident_resolve=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
