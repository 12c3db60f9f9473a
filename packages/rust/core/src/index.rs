//! Build and check operations for the index file.
//!
//! `build_index` regenerates the index wholesale: the preserved top heading
//! is read from the existing index, every entry document's heading is
//! extracted, and the rendered result replaces the output file. Any
//! extraction failure aborts the run before the output is touched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use docindex_shared::{
    DEFAULT_ENTRIES_DIR, DEFAULT_INDEX_FILE, DocIndexError, IndexEntry, Result,
};

use crate::render::render_index;

// ---------------------------------------------------------------------------
// Configuration and results
// ---------------------------------------------------------------------------

/// Configuration for an index build or check.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Repository root containing the index file and entries directory.
    pub repo_root: PathBuf,
    /// Entries subdirectory scanned for articles, relative to `repo_root`.
    pub entries_dir: String,
    /// Index file path relative to `repo_root`.
    pub index_file: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            entries_dir: DEFAULT_ENTRIES_DIR.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
        }
    }
}

/// Output from a successful index build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Filesystem path of the written index.
    pub index_path: PathBuf,
    /// Number of entry documents indexed.
    pub entry_count: usize,
}

/// Outcome of a `check_index` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The on-disk index matches the rendered expectation byte-for-byte.
    UpToDate { entry_count: usize },
    /// The on-disk index differs from the rendered expectation.
    Stale { entry_count: usize },
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Regenerate the index file.
///
/// 1. Read the existing index and extract its first-line heading (this is
///    how a manually-maintained top title survives regeneration).
/// 2. Discover entry documents and extract every heading.
/// 3. Render the full index in memory.
/// 4. Write it to a temp file next to the target and rename into place.
///
/// Steps 1–2 fail fast on any missing heading, so a defective entry leaves
/// the existing index untouched.
#[instrument(skip_all, fields(root = %config.repo_root.display(), index = config.index_file))]
pub fn build_index(config: &BuildConfig) -> Result<BuildResult> {
    let index_path = config.repo_root.join(&config.index_file);
    let heading = preserved_heading(config, &index_path)?;

    let entries = collect_entries(config)?;
    let rendered = render_index(&heading, &entries);

    write_atomic(&index_path, &rendered)?;

    info!(
        entry_count = entries.len(),
        path = %index_path.display(),
        "index regenerated"
    );

    Ok(BuildResult {
        index_path,
        entry_count: entries.len(),
    })
}

/// Verify the index file is current without rewriting it.
///
/// Renders the expected index from the live document set and compares it
/// byte-for-byte against the on-disk file. Extraction failures propagate
/// exactly as in [`build_index`].
#[instrument(skip_all, fields(root = %config.repo_root.display(), index = config.index_file))]
pub fn check_index(config: &BuildConfig) -> Result<CheckOutcome> {
    let index_path = config.repo_root.join(&config.index_file);
    let current = std::fs::read_to_string(&index_path)
        .map_err(|e| DocIndexError::io(&index_path, e))?;

    let heading = docindex_markdown::extract_heading(Path::new(&config.index_file), &current)?;
    let entries = collect_entries(config)?;
    let expected = render_index(&heading, &entries);

    if current == expected {
        debug!(entry_count = entries.len(), "index is up to date");
        Ok(CheckOutcome::UpToDate {
            entry_count: entries.len(),
        })
    } else {
        debug!(
            current_len = current.len(),
            expected_len = expected.len(),
            "index differs from rendered expectation"
        );
        Ok(CheckOutcome::Stale {
            entry_count: entries.len(),
        })
    }
}

/// Resolve title/path pairs for every discovered article.
///
/// Discovery plus extraction only — the index file is neither read nor
/// written.
#[instrument(skip_all, fields(root = %config.repo_root.display()))]
pub fn list_entries(config: &BuildConfig) -> Result<Vec<IndexEntry>> {
    collect_entries(config)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read the existing index and extract its preserved first-line heading.
fn preserved_heading(config: &BuildConfig, index_path: &Path) -> Result<String> {
    let existing = std::fs::read_to_string(index_path)
        .map_err(|e| DocIndexError::io(index_path, e))?;

    // The error path is the configured (relative) name so diagnostics match
    // what the operator typed, not a normalized absolute path.
    docindex_markdown::extract_heading(Path::new(&config.index_file), &existing)
}

/// Discover documents and extract a heading for each, in index order.
fn collect_entries(config: &BuildConfig) -> Result<Vec<IndexEntry>> {
    let documents = docindex_discovery::discover_documents(&config.repo_root, &config.entries_dir)?;

    let mut entries = Vec::with_capacity(documents.len());
    for document in &documents {
        let content = std::fs::read_to_string(&document.fs_path)
            .map_err(|e| DocIndexError::io(&document.fs_path, e))?;
        let title = docindex_markdown::extract_heading(Path::new(&document.rel_path), &content)?;

        entries.push(IndexEntry {
            title,
            path: document.rel_path.clone(),
        });
    }

    debug!(entry_count = entries.len(), "entry headings extracted");
    Ok(entries)
}

/// Write `content` to a temp file beside `target` and rename into place.
fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DocIndexError::validation(format!("invalid index file name: {}", target.display()))
        })?;
    let temp = parent.join(format!(".{name}.tmp"));

    std::fs::write(&temp, content).map_err(|e| DocIndexError::io(&temp, e))?;
    std::fs::rename(&temp, target).map_err(|e| DocIndexError::io(target, e))?;

    debug!(path = %target.display(), bytes = content.len(), "wrote index file");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
