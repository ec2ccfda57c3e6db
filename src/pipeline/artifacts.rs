//! JSON artifact files shared between pipeline stages.
//!
//! Each stage writes its output as pretty-printed JSON under the artifacts
//! directory and the next stage reads it back, so stages can run in separate
//! invocations. A missing artifact is reported with the stage that produces
//! it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Raw corpus artifact, written by `ingest`.
pub const CORPUS_FILE: &str = "corpus.json";
/// Cleaned corpus artifact, written by `preprocess`.
pub const CORPUS_CLEAN_FILE: &str = "corpus_clean.json";
/// Extraction records artifact, written by `extract`.
pub const EXTRACTIONS_FILE: &str = "extractions.json";
/// Summaries artifact, written by `summarize`.
pub const SUMMARIES_FILE: &str = "summaries.json";

/// One document's stored summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Stable document identifier.
    pub doc_id: String,
    /// Source file name.
    pub filename: String,
    /// Summary text.
    pub summary: String,
}

/// Writes `value` as pretty-printed JSON to `dir/name`, creating `dir`.
///
/// Returns the written path.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] on filesystem failures or
/// [`PipelineError::Json`] if serialization fails.
pub fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(name);
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    std::fs::write(&path, body).map_err(|source| PipelineError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Reads `dir/name` as JSON, reporting the producing `stage` when missing.
///
/// # Errors
///
/// Returns [`PipelineError::ArtifactMissing`] if the file does not exist,
/// [`PipelineError::Io`] on read failures, or [`PipelineError::Json`] on
/// malformed content.
pub fn read_json<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
    stage: &'static str,
) -> Result<T> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(PipelineError::ArtifactMissing {
            name,
            dir: dir.to_path_buf(),
            stage,
        });
    }
    let body = std::fs::read_to_string(&path).map_err(|source| PipelineError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![SummaryRecord {
            doc_id: "d1".to_string(),
            filename: "a.txt".to_string(),
            summary: "A summary.".to_string(),
        }];
        let path = write_json(dir.path(), SUMMARIES_FILE, &records).unwrap();
        assert!(path.is_file());

        let back: Vec<SummaryRecord> = read_json(dir.path(), SUMMARIES_FILE, "summarize").unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_write_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("artifacts");
        write_json(&nested, CORPUS_FILE, &Vec::<SummaryRecord>::new()).unwrap();
        assert!(nested.join(CORPUS_FILE).is_file());
    }

    #[test]
    fn test_read_missing_names_stage() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<Vec<SummaryRecord>>(dir.path(), CORPUS_FILE, "ingest");
        match err {
            Err(PipelineError::ArtifactMissing { name, stage, .. }) => {
                assert_eq!(name, CORPUS_FILE);
                assert_eq!(stage, "ingest");
            }
            other => panic!("expected ArtifactMissing, got {other:?}"),
        }
    }
}
