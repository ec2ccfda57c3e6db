//! # docsift-rs
//!
//! Offline document-intelligence pipeline: ingests short text documents,
//! extracts structured facts (entities, metrics, sentiment, issues) and
//! summaries with no cloud dependency, and answers free-text queries over
//! the corpus through a small rule-based agent.
//!
//! # Architecture
//!
//! ```text
//! *.txt files → pipeline::ingest → pipeline::preprocess
//!   ├── backend::ExtractorChain  → core::extract  → extractions.json
//!   └── backend::SummarizerChain → summaries.json
//!
//! query → agent::Plan::for_query → agent::AgentExecutor
//!   ├── core::Corpus::search (substring, corpus order)
//!   └── core::SummaryStore::get per match
//! → PlanResult (at most 3 results)
//! ```
//!
//! The [`core`] and [`agent`] modules are pure decision logic: synchronous,
//! deterministic, total over their inputs, and free of I/O and
//! configuration. The [`pipeline`] module is the orchestration layer that
//! resolves files and configuration into in-memory snapshots before the
//! core runs, and the [`backend`] module is the seam where richer
//! extraction/summarization services would slot in ahead of the
//! guaranteed-available heuristics.

pub mod agent;
pub mod backend;
pub mod cli;
pub mod core;
pub mod error;
pub mod pipeline;

// Re-export key types
pub use agent::{AgentExecutor, Plan, PlanResult, SearchHit, Step, Tool};
pub use backend::{ExtractionBackend, ExtractorChain, Summarizer, SummarizerChain};
pub use crate::core::{
    Corpus, Document, EntityKind, EntityMention, Extraction, ExtractionRecord, Sentiment,
    SentimentLabel, SummaryStore, extract,
};
pub use error::{CommandError, PipelineError, Result};
pub use pipeline::{PipelineConfig, SourceDocument, SummaryRecord};
