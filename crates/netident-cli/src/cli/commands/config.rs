//! `netident config` - manage the CLI configuration file.

use anyhow::{bail, Result};

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;

            match key.as_str() {
                "max_workers" => config.max_workers = Some(value.parse()?),
                "output_format" => config.output_format = Some(value.parse()?),
                _ => bail!(
                    "Unknown configuration key: {key}\n\
                     Valid keys: max_workers, output_format"
                ),
            }

            config.save()?;
            println!("Set {key} = {value}");
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}
