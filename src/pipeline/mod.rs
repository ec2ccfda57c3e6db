//! Orchestration layer: stages, artifacts, and backend wiring.
//!
//! Everything the core treats as an external collaborator lives here:
//! reading documents off disk, resolving them into in-memory snapshots,
//! selecting backend chains from configuration, and moving JSON artifacts
//! between stages. Stage functions mirror the CLI subcommands and can run
//! independently; each reads its predecessor's artifact and writes its own.

pub mod artifacts;
pub mod config;
pub mod evaluate;
pub mod ingest;
pub mod preprocess;

use rayon::prelude::*;

use crate::agent::{AgentExecutor, PlanResult};
use crate::backend::{ExtractorChain, SummarizerChain};
use crate::core::{Corpus, Document, ExtractionRecord, SummaryStore};
use crate::error::Result;

use artifacts::{CORPUS_CLEAN_FILE, CORPUS_FILE, EXTRACTIONS_FILE, SUMMARIES_FILE, read_json, write_json};

// Re-export key types
pub use artifacts::SummaryRecord;
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use evaluate::SummaryLengthStats;
pub use ingest::SourceDocument;
pub use preprocess::CorpusStats;

/// Assembles the extraction chain for the current configuration.
///
/// Remote variants register ahead of the heuristic terminal when local mode
/// is off; none ship yet.
fn extraction_chain(config: &PipelineConfig) -> ExtractorChain {
    if !config.local_mode {
        tracing::warn!("no remote extraction backends are built in; using the heuristic");
    }
    ExtractorChain::heuristic_only()
}

/// Assembles the summarization chain for the current configuration.
fn summarizer_chain(config: &PipelineConfig) -> SummarizerChain {
    if !config.local_mode {
        tracing::warn!("no remote summarizers are built in; using leading sentences");
    }
    SummarizerChain::heuristic_only()
}

/// Ingests documents from the configured directory and writes the raw
/// corpus artifact.
pub fn run_ingest(config: &PipelineConfig) -> Result<Vec<SourceDocument>> {
    let docs = ingest::ingest_dir(&config.docs_dir)?;
    let path = write_json(&config.artifacts_dir, CORPUS_FILE, &docs)?;
    tracing::info!(count = docs.len(), path = %path.display(), "ingested corpus");
    Ok(docs)
}

/// Cleans the raw corpus, logs shape statistics, and writes the cleaned
/// corpus artifact.
pub fn run_preprocess(config: &PipelineConfig) -> Result<Vec<Document>> {
    let raw: Vec<SourceDocument> = read_json(&config.artifacts_dir, CORPUS_FILE, "ingest")?;
    let stats = CorpusStats::compute(&raw);
    tracing::info!(
        n_docs = stats.n_docs,
        avg_len = stats.avg_len,
        median_len = stats.median_len,
        "corpus statistics"
    );
    let docs = preprocess::preprocess(raw);
    let path = write_json(&config.artifacts_dir, CORPUS_CLEAN_FILE, &docs)?;
    tracing::info!(count = docs.len(), path = %path.display(), "preprocessed corpus");
    Ok(docs)
}

/// Extracts structured records from the cleaned corpus and writes the
/// extractions artifact.
///
/// Documents are independent, so extraction fans out across a thread pool;
/// results are collected back in corpus order.
pub fn run_extract(config: &PipelineConfig) -> Result<Vec<ExtractionRecord>> {
    let docs: Vec<Document> = read_json(&config.artifacts_dir, CORPUS_CLEAN_FILE, "preprocess")?;
    let chain = extraction_chain(config);
    tracing::debug!(backend = chain.primary_name(), "extraction backend selected");

    let records: Vec<ExtractionRecord> = docs
        .par_iter()
        .map(|d| ExtractionRecord::new(d.doc_id.clone(), d.filename.clone(), chain.extract(&d.text_clean)))
        .collect();

    let path = write_json(&config.artifacts_dir, EXTRACTIONS_FILE, &records)?;
    tracing::info!(count = records.len(), path = %path.display(), "wrote extractions");
    Ok(records)
}

/// Summarizes the cleaned corpus and writes the summaries artifact.
pub fn run_summarize(config: &PipelineConfig) -> Result<Vec<SummaryRecord>> {
    let docs: Vec<Document> = read_json(&config.artifacts_dir, CORPUS_CLEAN_FILE, "preprocess")?;
    let chain = summarizer_chain(config);

    let records: Vec<SummaryRecord> = docs
        .iter()
        .map(|d| SummaryRecord {
            doc_id: d.doc_id.clone(),
            filename: d.filename.clone(),
            summary: chain.summarize(&d.text_clean),
        })
        .collect();

    let path = write_json(&config.artifacts_dir, SUMMARIES_FILE, &records)?;
    tracing::info!(count = records.len(), path = %path.display(), "wrote summaries");
    Ok(records)
}

/// Computes and logs summary length statistics.
pub fn run_evaluate(config: &PipelineConfig) -> Result<SummaryLengthStats> {
    let records: Vec<SummaryRecord> =
        read_json(&config.artifacts_dir, SUMMARIES_FILE, "summarize")?;
    let stats = SummaryLengthStats::compute(&records);
    tracing::info!(
        count = stats.count,
        mean_chars = stats.mean_chars,
        min_chars = stats.min_chars,
        max_chars = stats.max_chars,
        "summary length statistics"
    );
    Ok(stats)
}

/// Loads the corpus snapshot and summary store for agent queries.
///
/// A missing summaries artifact is not fatal: queries still run, with every
/// summary reported as absent.
pub fn load_snapshot(config: &PipelineConfig) -> Result<(Corpus, SummaryStore)> {
    let docs: Vec<Document> = read_json(&config.artifacts_dir, CORPUS_CLEAN_FILE, "preprocess")?;
    let corpus = Corpus::new(docs);

    let summaries = match read_json::<Vec<SummaryRecord>>(
        &config.artifacts_dir,
        SUMMARIES_FILE,
        "summarize",
    ) {
        Ok(records) => records.into_iter().map(|r| (r.doc_id, r.summary)).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "no summaries artifact; queries return bare matches");
            SummaryStore::new()
        }
    };
    Ok((corpus, summaries))
}

/// Plans and executes a query against the current snapshot.
pub fn run_agent(config: &PipelineConfig, query: &str) -> Result<PlanResult> {
    let (corpus, summaries) = load_snapshot(config)?;
    let executor = AgentExecutor::new(&corpus, &summaries);
    let result = executor.execute(query);
    tracing::info!(
        query,
        steps = result.plan.len(),
        results = result.results.len(),
        "query executed"
    );
    Ok(result)
}
