//! First-line heading extraction for Markdown articles.
//!
//! Every article's display title is the text of its first-line ATX heading.
//! A file without one is a content-authoring defect, and the caller is
//! expected to abort the whole regeneration rather than emit a partial index.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use docindex_shared::{DocIndexError, Result};

/// Matches a first-line ATX heading: one or more `#`, at least one
/// whitespace character, then the heading text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s+(.+)$").expect("valid regex"));

/// Extract the trimmed heading text from the first line of `content`.
///
/// Returns `None` when the content is empty or the first line is not a
/// well-formed heading. CRLF endings are tolerated — `str::lines` strips
/// the trailing `\r` before the pattern runs.
pub fn first_heading(content: &str) -> Option<String> {
    let first_line = content.lines().next()?;
    let captures = HEADING_RE.captures(first_line)?;
    let title = captures[1].trim();

    if title.is_empty() {
        return None;
    }

    trace!(title, "extracted first-line heading");
    Some(title.to_string())
}

/// Extract the first-line heading of the file at `path`.
///
/// Fails with [`DocIndexError::MissingHeading`] naming `path` when the
/// first line does not match the heading pattern.
pub fn extract_heading(path: &Path, content: &str) -> Result<String> {
    first_heading(content).ok_or_else(|| DocIndexError::missing_heading(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_heading_h1() {
        assert_eq!(first_heading("# Title\n\nBody.\n"), Some("Title".into()));
    }

    #[test]
    fn first_heading_deeper_levels() {
        assert_eq!(first_heading("## How do I B?\n"), Some("How do I B?".into()));
        assert_eq!(first_heading("###### Deep\n"), Some("Deep".into()));
        // Arbitrary leading `#` count, not capped at six.
        assert_eq!(first_heading("####### Deeper\n"), Some("Deeper".into()));
    }

    #[test]
    fn first_heading_trims_surrounding_whitespace() {
        assert_eq!(first_heading("#   Padded title   \n"), Some("Padded title".into()));
        assert_eq!(first_heading("#\tTabbed\n"), Some("Tabbed".into()));
    }

    #[test]
    fn first_heading_preserves_interior_whitespace() {
        assert_eq!(
            first_heading("# Spaced  out  title\n"),
            Some("Spaced  out  title".into())
        );
    }

    #[test]
    fn first_heading_tolerates_crlf() {
        assert_eq!(first_heading("# Title\r\nBody.\r\n"), Some("Title".into()));
    }

    #[test]
    fn first_heading_rejects_empty_content() {
        assert_eq!(first_heading(""), None);
        assert_eq!(first_heading("\n\n"), None);
    }

    #[test]
    fn first_heading_rejects_missing_hash() {
        assert_eq!(first_heading("Not a heading\n"), None);
    }

    #[test]
    fn first_heading_rejects_heading_on_second_line() {
        assert_eq!(first_heading("\n# Title\n"), None);
        assert_eq!(first_heading("preamble\n# Title\n"), None);
    }

    #[test]
    fn first_heading_rejects_hash_without_whitespace() {
        assert_eq!(first_heading("#Title\n"), None);
    }

    #[test]
    fn first_heading_rejects_empty_title() {
        assert_eq!(first_heading("# \n"), None);
        assert_eq!(first_heading("##   \n"), None);
    }

    #[test]
    fn extract_heading_names_offending_path() {
        let err = extract_heading(Path::new("entries/bad.md"), "Not a heading\n")
            .expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "no #-header on first line of entries/bad.md"
        );
    }

    #[test]
    fn extract_heading_success() {
        let title = extract_heading(Path::new("entries/a.md"), "## How do I A?\n")
            .expect("well-formed heading");
        assert_eq!(title, "How do I A?");
    }
}
