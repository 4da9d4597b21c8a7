//! `netident rules` - search and highlight ModSecurity rule blocks.

use anyhow::{Context as _, Result};
use colored::Colorize;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

use crate::cli::args::RulesArgs;

pub fn execute(args: &RulesArgs) -> Result<()> {
    let pattern = Regex::new(&args.pattern).context("invalid search pattern")?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&args.dir)
        .with_context(|| format!("failed to read rules directory {}", args.dir.display()))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "conf"))
        .collect();
    paths.sort();

    for path in paths {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        for block in split_blocks(&text) {
            if pattern.is_match(&block) {
                let highlighted = highlight_rule(&block);
                // Search matches on top of the syntax colors, reverse video.
                let highlighted = pattern
                    .replace_all(&highlighted, |caps: &regex::Captures<'_>| {
                        caps[0].reversed().to_string()
                    })
                    .into_owned();

                println!("== {name} ==");
                println!("{highlighted}");
            }
        }
    }

    Ok(())
}

/// Split rule text into blocks; a line starting with `# tags:` begins a
/// new block.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.starts_with("# tags:") && !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Apply ModSecurity syntax colors to a rule block
fn highlight_rule(text: &str) -> String {
    let mut out = replace_with(text, r"\bSecRule\b", |m| m.cyan().to_string());
    out = replace_with(&out, r"\bid:\d{5,8}\b", |m| m.blue().to_string());
    out = replace_with(&out, r"\bpass\b", |m| m.green().to_string());
    out = replace_with(&out, r"\b(block|deny)\b", |m| m.red().to_string());
    out = replace_with(&out, r"\bseverity:\d+\b", |m| m.yellow().to_string());
    out = replace_with(&out, r"\bchain\b", |m| m.bright_cyan().to_string());
    out = replace_with(&out, r"\bsetvar:", |m| m.magenta().to_string());
    out = replace_with(&out, r"\btag:", |m| m.bold().magenta().to_string());
    out = replace_with(&out, r"(?i)\btx:", |m| m.bold().magenta().to_string());
    // Transformation tokens, except the no-op t:none
    out = replace_with(&out, r#"\bt:[^,"\s]+"#, |m| {
        if m == "t:none" {
            m.to_string()
        } else {
            m.yellow().to_string()
        }
    });
    out = replace_with(&out, r"\|\|", |m| m.bright_green().to_string());
    out = replace_with(&out, "'", |m| m.red().to_string());
    out = replace_with(&out, "\"", |m| m.bright_green().to_string());
    out = replace_with(&out, r"%\{[^}]+\}", |m| m.bright_green().to_string());
    out
}

fn replace_with(text: &str, pattern: &str, f: impl Fn(&str) -> String) -> String {
    let re = Regex::new(pattern).expect("valid highlight pattern");
    re.replace_all(text, |caps: &regex::Captures<'_>| f(&caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# tags: injection
SecRule ARGS \"@rx select\" \"id:100001,pass,t:lowercase\"
# tags: scanner
SecRule REQUEST_HEADERS:User-Agent \"@pm nikto\" \"id:100002,deny,severity:2\"
";

    #[test]
    fn test_split_blocks_on_tag_lines() {
        let blocks = split_blocks(SAMPLE);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("# tags: injection"));
        assert!(blocks[0].contains("id:100001"));
        assert!(blocks[1].starts_with("# tags: scanner"));
        assert!(blocks[1].contains("id:100002"));
    }

    #[test]
    fn test_leading_text_belongs_to_first_block() {
        let blocks = split_blocks("# preamble\n# tags: a\nSecRule X\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "# preamble\n");
    }

    #[test]
    fn test_text_without_tag_lines_is_one_block() {
        let blocks = split_blocks("SecRule A\nSecRule B\n");
        assert_eq!(blocks.len(), 1);
    }
}
