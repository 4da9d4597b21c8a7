//! Output formatting for resolution reports.

use clap::ValueEnum;
use colored::Colorize;
use netident_core::ResultRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One colored line per entry
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "plain" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render records in submission order, one per entry.
pub fn render_records(records: &[ResultRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(records)?);
        }
        OutputFormat::Csv => {
            println!("entry,outcome");
            for record in records {
                println!("{}", csv_line(record));
            }
        }
        OutputFormat::Pretty => {
            for record in records {
                let outcome = record.outcome.to_string();
                let outcome = if record.outcome.is_failure() {
                    outcome.red().to_string()
                } else {
                    outcome
                };
                println!("{} : {}", record.entry.to_string().cyan(), outcome);
            }
        }
    }

    Ok(())
}

/// One CSV row; the outcome is quoted since registry lines contain commas
fn csv_line(record: &ResultRecord) -> String {
    format!("{},\"{}\"", record.entry, record.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netident_core::{Entry, RegistryInfo, ResolutionOutcome};

    #[test]
    fn test_format_parsing_accepts_aliases() {
        assert_eq!("pretty".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("tsv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_csv_quotes_the_outcome_column() {
        let record = ResultRecord::new(
            0,
            Entry::new("8.8.8.0/24"),
            ResolutionOutcome::Registry(RegistryInfo::new(
                Some("LVLT-GOGL-8-8-8".into()),
                Some("Google LLC".into()),
                Some("NET-8-8-8-0-1".into()),
            )),
        );
        assert_eq!(
            csv_line(&record),
            "8.8.8.0/24,\"NetName: LVLT-GOGL-8-8-8, Google LLC, NET-8-8-8-0-1\""
        );
    }
}
