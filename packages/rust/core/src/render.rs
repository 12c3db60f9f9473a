//! Markdown rendering of the index file.

use docindex_shared::IndexEntry;

/// Render the complete index document.
///
/// Layout: the preserved heading as a level-1 heading, a blank line, then
/// one `[title](path)` link line per entry, each followed by exactly one
/// blank line. With no entries the result is the heading block alone.
pub fn render_index(heading: &str, entries: &[IndexEntry]) -> String {
    let mut out = String::with_capacity(64 + entries.len() * 64);

    out.push_str("# ");
    out.push_str(heading);
    out.push_str("\n\n");

    for entry in entries {
        out.push_str(&format!("[{}]({})\n\n", entry.title, entry.path));
    }

    out
}
