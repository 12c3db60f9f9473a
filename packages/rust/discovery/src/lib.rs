//! Entry document discovery.
//!
//! Recursively walks the entries directory for `*.md` files and produces a
//! path-sorted document list. The ordering is load-bearing: it determines
//! the final index order, so it must be identical across runs and platforms
//! regardless of filesystem iteration order.

use std::path::Path;

use tracing::{debug, instrument};

use docindex_shared::{DocIndexError, Document, Result};

/// Discover every `*.md` file under `repo_root/entries_dir`.
///
/// Returns documents sorted by byte-wise lexical comparison of their
/// forward-slash relative paths. The caller iterates the result exactly
/// once; discovery itself never reads file contents.
///
/// Symlinks are not followed. A missing or unreadable entries directory is
/// an I/O error carrying the directory path.
#[instrument(skip_all, fields(root = %repo_root.display(), dir = entries_dir))]
pub fn discover_documents(repo_root: &Path, entries_dir: &str) -> Result<Vec<Document>> {
    let dir = repo_root.join(entries_dir);

    let mut documents = Vec::new();
    walk_dir(repo_root, &dir, &mut documents)?;

    documents.sort_by(|a, b| a.rel_path.as_bytes().cmp(b.rel_path.as_bytes()));

    debug!(count = documents.len(), "documents discovered");
    Ok(documents)
}

/// Collect `*.md` files under `dir`, recursing into subdirectories.
fn walk_dir(repo_root: &Path, dir: &Path, out: &mut Vec<Document>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| DocIndexError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| DocIndexError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| DocIndexError::io(&path, e))?;

        if file_type.is_dir() {
            walk_dir(repo_root, &path, out)?;
        } else if file_type.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            out.push(Document {
                rel_path: rel_path_string(repo_root, &path)?,
                fs_path: path,
            });
        }
    }

    Ok(())
}

/// Render `path` relative to `repo_root` as a forward-slash string.
///
/// Link targets must be valid text, so a non-UTF-8 path segment is a
/// validation error rather than a lossy conversion.
fn rel_path_string(repo_root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(repo_root).unwrap_or(path);

    let mut segments = Vec::new();
    for component in rel.components() {
        let segment = component.as_os_str().to_str().ok_or_else(|| {
            DocIndexError::validation(format!("non-UTF-8 path segment in {}", path.display()))
        })?;
        segments.push(segment);
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_repo() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "docindex-discovery-test-{}",
            uuid::Uuid::now_v7()
        ));
        std::fs::create_dir_all(dir.join("entries")).unwrap();
        dir
    }

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "# stub\n").unwrap();
    }

    #[test]
    fn discovers_sorted_by_relative_path() {
        let repo = temp_repo();
        touch(&repo.join("entries/b.md"));
        touch(&repo.join("entries/a.md"));
        touch(&repo.join("entries/c.md"));

        let docs = discover_documents(&repo, "entries").unwrap();
        let paths: Vec<&str> = docs.iter().map(|d| d.rel_path.as_str()).collect();
        assert_eq!(paths, ["entries/a.md", "entries/b.md", "entries/c.md"]);

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn recurses_into_subdirectories() {
        let repo = temp_repo();
        touch(&repo.join("entries/top.md"));
        touch(&repo.join("entries/sub/nested.md"));
        touch(&repo.join("entries/sub/deeper/leaf.md"));

        let docs = discover_documents(&repo, "entries").unwrap();
        let paths: Vec<&str> = docs.iter().map(|d| d.rel_path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "entries/sub/deeper/leaf.md",
                "entries/sub/nested.md",
                "entries/top.md",
            ]
        );

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn ignores_non_markdown_files() {
        let repo = temp_repo();
        touch(&repo.join("entries/article.md"));
        std::fs::write(repo.join("entries/notes.txt"), "text").unwrap();
        std::fs::write(repo.join("entries/script.sh"), "#!/bin/sh\n").unwrap();

        let docs = discover_documents(&repo, "entries").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].rel_path, "entries/article.md");

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn empty_entries_dir_yields_no_documents() {
        let repo = temp_repo();

        let docs = discover_documents(&repo, "entries").unwrap();
        assert!(docs.is_empty());

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn missing_entries_dir_is_io_error() {
        let repo = temp_repo();

        let err = discover_documents(&repo, "no-such-dir").unwrap_err();
        assert!(matches!(err, DocIndexError::Io { .. }));
        assert!(err.to_string().contains("no-such-dir"));

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn ordering_is_byte_wise_not_numeric() {
        let repo = temp_repo();
        touch(&repo.join("entries/10-second.md"));
        touch(&repo.join("entries/2-first.md"));

        let docs = discover_documents(&repo, "entries").unwrap();
        let paths: Vec<&str> = docs.iter().map(|d| d.rel_path.as_str()).collect();
        // "1" < "2" byte-wise, so 10-second sorts before 2-first.
        assert_eq!(paths, ["entries/10-second.md", "entries/2-first.md"]);

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn fs_path_reads_back_to_the_same_file() {
        let repo = temp_repo();
        std::fs::write(repo.join("entries/a.md"), "# Alpha\n").unwrap();

        let docs = discover_documents(&repo, "entries").unwrap();
        let content = std::fs::read_to_string(&docs[0].fs_path).unwrap();
        assert_eq!(content, "# Alpha\n");

        let _ = std::fs::remove_dir_all(&repo);
    }
}
