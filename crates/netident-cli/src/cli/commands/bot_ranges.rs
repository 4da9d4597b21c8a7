//! `netident bot-ranges` - snapshot the published crawler IP ranges.

use anyhow::{Context as _, Result};
use std::io::Write as _;
use std::path::Path;

use crate::cli::args::BotRangesArgs;
use netident_client::BotRangeClient;

pub async fn execute(args: &BotRangesArgs) -> Result<()> {
    let client = BotRangeClient::new();
    let ranges = client
        .fetch_default()
        .await
        .context("failed to download crawler ranges")?;

    write_ranges(&args.out, &ranges)?;
    println!("Wrote {} ranges to {}", ranges.len(), args.out.display());

    Ok(())
}

/// Write one prefix per line, atomically: a tempfile in the target
/// directory is renamed over the destination so readers never see a
/// partial list.
fn write_ranges(path: &Path, ranges: &[String]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp =
        tempfile::NamedTempFile::new_in(dir).context("failed to create temporary file")?;
    for network in ranges {
        writeln!(tmp, "{network}")?;
    }

    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ranges_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ranges.data");

        let ranges = vec!["10.0.0.0/8".to_string(), "2001:db8::/32".to_string()];
        write_ranges(&out, &ranges).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "10.0.0.0/8\n2001:db8::/32\n");
    }

    #[test]
    fn test_write_ranges_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ranges.data");
        std::fs::write(&out, "stale contents\n").unwrap();

        write_ranges(&out, &["192.0.2.0/24".to_string()]).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "192.0.2.0/24\n");
    }
}
