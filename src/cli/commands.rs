//! CLI command implementations.
//!
//! Contains the business logic for each CLI command. Commands return their
//! rendered output as a `String`; only the binary entry point writes to
//! stdout.

// Allow certain patterns that improve readability in CLI output formatting
#![allow(clippy::uninlined_format_args)]

use std::fmt::Write as FmtWrite;

use serde::Serialize;

use crate::agent::PlanResult;
use crate::cli::parser::{Cli, Commands};
use crate::error::CommandError;
use crate::pipeline::{self, PipelineConfig};

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a format string (case-insensitive); anything but `json` is
    /// text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Executes the parsed CLI command.
///
/// # Errors
///
/// Returns [`CommandError`] if the underlying stage or rendering fails.
pub fn execute(cli: &Cli) -> Result<String, CommandError> {
    let format = OutputFormat::parse(&cli.format);
    let config = cli.config();

    match &cli.command {
        Commands::Ingest => cmd_ingest(&config, format),
        Commands::Preprocess => cmd_preprocess(&config, format),
        Commands::Extract => cmd_extract(&config, format),
        Commands::Summarize => cmd_summarize(&config, format),
        Commands::Evaluate => cmd_evaluate(&config, format),
        Commands::Agent { query } => cmd_agent(&config, query, format),
        Commands::All { query } => cmd_all(&config, query, format),
    }
}

/// Renders a value as pretty-printed JSON.
fn to_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CommandError::ExecutionFailed(format!("serialization error: {e}")))
}

fn cmd_ingest(config: &PipelineConfig, format: OutputFormat) -> Result<String, CommandError> {
    let docs = pipeline::run_ingest(config)?;
    match format {
        OutputFormat::Json => to_json(&docs),
        OutputFormat::Text => Ok(format!(
            "Ingested {} documents from {} into {}",
            docs.len(),
            config.docs_dir.display(),
            config.artifacts_dir.display()
        )),
    }
}

fn cmd_preprocess(config: &PipelineConfig, format: OutputFormat) -> Result<String, CommandError> {
    let docs = pipeline::run_preprocess(config)?;
    match format {
        OutputFormat::Json => to_json(&docs),
        OutputFormat::Text => Ok(format!("Preprocessed {} documents", docs.len())),
    }
}

fn cmd_extract(config: &PipelineConfig, format: OutputFormat) -> Result<String, CommandError> {
    let records = pipeline::run_extract(config)?;
    match format {
        OutputFormat::Json => to_json(&records),
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Extracted {} records", records.len());
            for record in &records {
                let _ = writeln!(
                    output,
                    "  {} [{}]: {} entities, {} metrics, sentiment {} ({:.2}), {} issues",
                    record.filename,
                    record.doc_id,
                    record.extraction.entities.len(),
                    record.extraction.metrics.len(),
                    record.extraction.sentiment.label,
                    record.extraction.sentiment.confidence,
                    record.extraction.issues.len()
                );
            }
            Ok(output)
        }
    }
}

fn cmd_summarize(config: &PipelineConfig, format: OutputFormat) -> Result<String, CommandError> {
    let records = pipeline::run_summarize(config)?;
    match format {
        OutputFormat::Json => to_json(&records),
        OutputFormat::Text => Ok(format!("Wrote {} summaries", records.len())),
    }
}

fn cmd_evaluate(config: &PipelineConfig, format: OutputFormat) -> Result<String, CommandError> {
    let stats = pipeline::run_evaluate(config)?;
    match format {
        OutputFormat::Json => to_json(&stats),
        OutputFormat::Text => Ok(format!(
            "Summaries: {} (mean {:.1} chars, min {}, max {})",
            stats.count, stats.mean_chars, stats.min_chars, stats.max_chars
        )),
    }
}

fn cmd_agent(
    config: &PipelineConfig,
    query: &str,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let result = pipeline::run_agent(config, query)?;
    match format {
        OutputFormat::Json => to_json(&result),
        OutputFormat::Text => Ok(format_plan_result(&result)),
    }
}

fn cmd_all(
    config: &PipelineConfig,
    query: &str,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let mut output = String::new();
    let _ = writeln!(output, "=== Ingest ===");
    let _ = writeln!(output, "{}", cmd_ingest(config, OutputFormat::Text)?);
    let _ = writeln!(output, "=== Preprocess ===");
    let _ = writeln!(output, "{}", cmd_preprocess(config, OutputFormat::Text)?);
    let _ = writeln!(output, "=== Extract ===");
    let _ = writeln!(output, "{}", cmd_extract(config, OutputFormat::Text)?);
    let _ = writeln!(output, "=== Summarize ===");
    let _ = writeln!(output, "{}", cmd_summarize(config, OutputFormat::Text)?);
    let _ = writeln!(output, "=== Evaluate ===");
    let _ = writeln!(output, "{}", cmd_evaluate(config, OutputFormat::Text)?);
    let _ = writeln!(output, "=== Agent ===");
    let _ = writeln!(output, "{}", cmd_agent(config, query, format)?);
    Ok(output)
}

/// Renders a plan result for terminal output.
fn format_plan_result(result: &PlanResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Query: {}", result.query);

    let steps: Vec<String> = result
        .plan
        .steps()
        .iter()
        .map(|s| {
            let term = s.term();
            if term.is_empty() {
                s.tool.as_str().to_string()
            } else {
                format!("{}(term=\"{term}\")", s.tool.as_str())
            }
        })
        .collect();
    let _ = writeln!(output, "Plan: {}", steps.join(" -> "));

    if result.results.is_empty() {
        let _ = writeln!(output, "No results.");
        return output;
    }

    let _ = writeln!(output, "Results ({}):", result.results.len());
    for (i, hit) in result.results.iter().enumerate() {
        let _ = writeln!(output, "  {}. {} [{}]", i + 1, hit.filename, hit.doc_id);
        match &hit.summary {
            Some(summary) => {
                let _ = writeln!(output, "     summary: {summary}");
            }
            None => {
                let _ = writeln!(output, "     summary: (none)");
            }
        }
    }
    output
}
