//! Core domain types for the docindex pipeline.

use std::path::PathBuf;

use serde::Serialize;

/// Default index file, relative to the repository root.
pub const DEFAULT_INDEX_FILE: &str = "README.md";

/// Default entries subdirectory scanned for articles.
pub const DEFAULT_ENTRIES_DIR: &str = "entries";

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A single Markdown article discovered under the entries directory.
///
/// Documents are created and edited by hand outside this tool; docindex
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Path relative to the repository root, forward-slash separated.
    ///
    /// This is the stable sort key and the link target emitted into the
    /// index, so it must be identical across platforms.
    pub rel_path: String,
    /// Filesystem path used for reading the file.
    #[serde(skip)]
    pub fs_path: PathBuf,
}

// ---------------------------------------------------------------------------
// IndexEntry
// ---------------------------------------------------------------------------

/// A resolved index entry: display title plus link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Trimmed heading text of the article's first line.
    pub title: String,
    /// Repository-root-relative path of the article.
    pub path: String,
}
