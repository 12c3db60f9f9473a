//! Error types for docindex.
//!
//! Library crates use [`DocIndexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all docindex operations.
#[derive(Debug, thiserror::Error)]
pub enum DocIndexError {
    /// A Markdown file whose first line is not a `#`-heading.
    ///
    /// Fatal for the whole regeneration: an index with a missing entry
    /// would silently misrepresent the documentation set.
    #[error("no #-header on first line of {}", path.display())]
    MissingHeading { path: PathBuf },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (non-UTF-8 path, malformed output target, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocIndexError>;

impl DocIndexError {
    /// Create a missing-heading error for the given file.
    pub fn missing_heading(path: impl Into<PathBuf>) -> Self {
        Self::MissingHeading { path: path.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }
}
