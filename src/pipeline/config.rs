//! Pipeline configuration with builder pattern and environment variable support.
//!
//! Configuration is resolved in order: explicit values → environment
//! variables → defaults. The core receives no configuration at all; this
//! value only steers the orchestration layer (directories, backend chain
//! assembly).

use std::path::PathBuf;

/// Default directory scanned for `*.txt` documents.
const DEFAULT_DOCS_DIR: &str = "data/docs";
/// Default directory for JSON artifacts.
const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Environment variable overriding the documents directory.
pub const ENV_DOCS_DIR: &str = "DOCSIFT_DOCS_DIR";
/// Environment variable overriding the artifacts directory.
pub const ENV_ARTIFACTS_DIR: &str = "DOCSIFT_ARTIFACTS_DIR";
/// Environment variable toggling local (offline) mode.
pub const ENV_LOCAL_MODE: &str = "DOCSIFT_LOCAL_MODE";

/// Configuration for the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory scanned for `*.txt` documents at ingestion.
    pub docs_dir: PathBuf,
    /// Directory JSON artifacts are written to and read from.
    pub artifacts_dir: PathBuf,
    /// When `true`, only offline heuristic backends are assembled into the
    /// extraction and summarization chains.
    pub local_mode: bool,
}

impl PipelineConfig {
    /// Creates a new builder for `PipelineConfig`.
    #[must_use]
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Creates configuration from environment variables with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::builder().from_env().build()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    docs_dir: Option<PathBuf>,
    artifacts_dir: Option<PathBuf>,
    local_mode: Option<bool>,
}

impl PipelineConfigBuilder {
    /// Sets the documents directory.
    #[must_use]
    pub fn docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = Some(dir.into());
        self
    }

    /// Sets the artifacts directory.
    #[must_use]
    pub fn artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = Some(dir.into());
        self
    }

    /// Sets local (offline) mode.
    #[must_use]
    pub const fn local_mode(mut self, local: bool) -> Self {
        self.local_mode = Some(local);
        self
    }

    /// Fills unset fields from environment variables.
    ///
    /// Explicit values set on the builder take precedence over the
    /// environment.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if self.docs_dir.is_none()
            && let Ok(dir) = std::env::var(ENV_DOCS_DIR)
        {
            self.docs_dir = Some(PathBuf::from(dir));
        }
        if self.artifacts_dir.is_none()
            && let Ok(dir) = std::env::var(ENV_ARTIFACTS_DIR)
        {
            self.artifacts_dir = Some(PathBuf::from(dir));
        }
        if self.local_mode.is_none()
            && let Ok(v) = std::env::var(ENV_LOCAL_MODE)
        {
            self.local_mode = Some(v.eq_ignore_ascii_case("true"));
        }
        self
    }

    /// Builds the configuration, applying defaults for unset fields.
    #[must_use]
    pub fn build(self) -> PipelineConfig {
        PipelineConfig {
            docs_dir: self.docs_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR)),
            artifacts_dir: self
                .artifacts_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            local_mode: self.local_mode.unwrap_or(true),
        }
    }
}
