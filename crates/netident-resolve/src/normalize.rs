//! Raw source text to an ordered entry list.

use netident_core::Entry;

/// Normalize raw source text into entries.
///
/// Lines are trimmed; blank lines and `#` comments are dropped. The
/// order of surviving lines is preserved and becomes the submission
/// order for resolution and reporting.
#[must_use]
pub fn normalize(raw: &str) -> Vec<Entry> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Entry::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_comments_and_blanks_keeps_order() {
        let raw = "8.8.8.0/24\n# comment\n\n1.1.1.1\n";
        let entries = normalize(raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_str(), "8.8.8.0/24");
        assert_eq!(entries[1].as_str(), "1.1.1.1");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let entries = normalize("  1.1.1.1  \n\t10.0.0.0/8\n");
        assert_eq!(entries[0].as_str(), "1.1.1.1");
        assert_eq!(entries[1].as_str(), "10.0.0.0/8");
    }

    #[test]
    fn test_indented_comment_is_still_a_comment() {
        assert!(normalize("   # nothing here\n").is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n\n\n").is_empty());
    }
}
