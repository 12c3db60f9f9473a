//! Shared types and error model for docindex.
//!
//! This crate is the foundation depended on by all other docindex crates.
//! It provides:
//! - [`DocIndexError`] — the unified error type
//! - Domain types ([`Document`], [`IndexEntry`])
//! - Default locations for the index file and entries directory

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{DocIndexError, Result};
pub use types::{DEFAULT_ENTRIES_DIR, DEFAULT_INDEX_FILE, Document, IndexEntry};
