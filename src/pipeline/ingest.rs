//! Document ingestion from a local directory.
//!
//! Realizes the `DocumentSource` collaborator: walks a directory for `*.txt`
//! files in sorted filename order and yields raw documents with stable
//! identifiers. The identifier is a truncated SHA-256 over filename and
//! modification time, so re-ingesting unchanged files reproduces the same
//! snapshot and edits produce a superseding one.

use std::path::Path;
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PipelineError, Result};

/// Hex characters kept from the identity hash.
const DOC_ID_LEN: usize = 16;

/// A raw document as yielded by the document source, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Stable opaque identifier.
    pub doc_id: String,
    /// Source file name.
    pub filename: String,
    /// Raw file contents.
    pub text: String,
}

/// Derives a stable document identifier from filename and mtime.
#[must_use]
fn doc_id_for(filename: &str, mtime_secs: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(filename.as_bytes());
    hasher.update(mtime_secs.to_string().as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..DOC_ID_LEN].to_string()
}

/// Reads all `*.txt` files under `docs_dir` in sorted filename order.
///
/// # Errors
///
/// Returns [`PipelineError::DocsDirMissing`] if the directory does not
/// exist, or [`PipelineError::Io`] if a listing or read fails.
pub fn ingest_dir(docs_dir: &Path) -> Result<Vec<SourceDocument>> {
    if !docs_dir.is_dir() {
        return Err(PipelineError::DocsDirMissing(docs_dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(docs_dir).map_err(|source| PipelineError::Io {
        path: docs_dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = std::fs::read_to_string(&path).map_err(|source| PipelineError::Io {
            path: path.clone(),
            source,
        })?;
        let mtime_secs = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|source| PipelineError::Io {
                path: path.clone(),
                source,
            })?
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());

        docs.push(SourceDocument {
            doc_id: doc_id_for(&filename, mtime_secs),
            filename,
            text,
        });
    }
    Ok(docs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_doc_id_is_stable_and_short() {
        let a = doc_id_for("report.txt", 1_700_000_000);
        let b = doc_id_for("report.txt", 1_700_000_000);
        assert_eq!(a, b);
        assert_eq!(a.len(), DOC_ID_LEN);
    }

    #[test]
    fn test_doc_id_changes_with_mtime() {
        let a = doc_id_for("report.txt", 1_700_000_000);
        let b = doc_id_for("report.txt", 1_700_000_001);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ingest_reads_txt_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let docs = ingest_dir(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(docs[0].text, "first");
    }

    #[test]
    fn test_ingest_assigns_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "y").unwrap();

        let docs = ingest_dir(dir.path()).unwrap();
        assert_ne!(docs[0].doc_id, docs[1].doc_id);
    }

    #[test]
    fn test_ingest_missing_dir_errors() {
        let err = ingest_dir(Path::new("/definitely/not/here"));
        assert!(matches!(err, Err(PipelineError::DocsDirMissing(_))));
    }

    #[test]
    fn test_ingest_empty_dir_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let docs = ingest_dir(dir.path()).unwrap();
        assert!(docs.is_empty());
    }
}
