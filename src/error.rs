//! Error types for docsift-rs.
//!
//! The core (pattern matching, extraction, corpus search, planning) is total
//! over its input domain and raises nothing. Errors exist only at the
//! orchestration boundary: filesystem I/O, artifact serialization, and
//! backend invocation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the orchestration layer (ingestion, artifacts, backends).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Filesystem operation failed.
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        /// Path the operation was attempted on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Artifact serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured documents directory does not exist.
    #[error("documents directory not found: {}", .0.display())]
    DocsDirMissing(PathBuf),

    /// A required artifact file is missing; the producing stage has not run.
    #[error("artifact {} not found in {} (run `docsift-rs {}` first)", .name, .dir.display(), .stage)]
    ArtifactMissing {
        /// Artifact file name.
        name: &'static str,
        /// Artifacts directory that was searched.
        dir: PathBuf,
        /// Stage that produces the artifact.
        stage: &'static str,
    },

    /// An extraction or summarization backend failed.
    ///
    /// Chains treat this as a signal to fall through to the next variant;
    /// it only propagates when a chain has no terminal backend.
    #[error("backend {name} failed: {message}")]
    Backend {
        /// Backend name.
        name: &'static str,
        /// Failure description.
        message: String,
    },
}

/// Errors surfaced by CLI command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A pipeline stage failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Command failed for a non-pipeline reason (bad flag value, output).
    #[error("command failed: {0}")]
    ExecutionFailed(String),
}

/// Crate-wide result alias defaulting to [`PipelineError`].
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
