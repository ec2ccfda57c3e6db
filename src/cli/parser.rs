//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{PipelineConfig, config};

/// docsift-rs: offline document-intelligence pipeline.
///
/// Ingests local text documents, extracts entities, metrics, sentiment and
/// issues without any cloud dependency, and answers free-text queries over
/// the corpus.
#[derive(Parser, Debug)]
#[command(name = "docsift-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory scanned for *.txt documents.
    ///
    /// Defaults to `data/docs` in the current directory.
    #[arg(long, env = config::ENV_DOCS_DIR, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Directory JSON artifacts are written to and read from.
    ///
    /// Defaults to `artifacts` in the current directory.
    #[arg(long, env = config::ENV_ARTIFACTS_DIR, global = true)]
    pub artifacts_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolves the pipeline configuration from flags, environment, and
    /// defaults, in that order.
    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        let mut builder = PipelineConfig::builder();
        if let Some(ref dir) = self.docs_dir {
            builder = builder.docs_dir(dir);
        }
        if let Some(ref dir) = self.artifacts_dir {
            builder = builder.artifacts_dir(dir);
        }
        builder.from_env().build()
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest *.txt documents into the raw corpus artifact.
    #[command(after_help = r#"Examples:
  docsift-rs ingest                          # Read data/docs into artifacts/corpus.json
  docsift-rs --docs-dir ./reports ingest     # Read a custom directory
"#)]
    Ingest,

    /// Clean the raw corpus and log shape statistics.
    Preprocess,

    /// Extract entities, metrics, sentiment, and issues per document.
    Extract,

    /// Summarize each document into the summaries artifact.
    Summarize,

    /// Report summary length statistics.
    Evaluate,

    /// Answer a free-text query over the corpus.
    ///
    /// Plans a tool sequence (search, summarize) and returns at most three
    /// matching documents with their stored summaries attached.
    #[command(after_help = r#"Examples:
  docsift-rs agent "Find issues in transit report"
  docsift-rs --format json agent "which docs mention budget" | jq '.results[].filename'
"#)]
    Agent {
        /// The query text.
        query: String,
    },

    /// Run every stage in order, then a demo query.
    All {
        /// Query executed after the stages complete.
        #[arg(default_value = "Find issues in transit report")]
        query: String,
    },
}
