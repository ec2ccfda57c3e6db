//! Pure decision logic: pattern matching, extraction, and corpus search.
//!
//! Everything in this module is synchronous, deterministic, and total over
//! its input domain; no I/O, no configuration, and no error states. The
//! orchestration layer in [`crate::pipeline`] resolves all I/O into
//! in-memory strings before anything here runs.

pub mod corpus;
pub mod extract;
pub mod patterns;

// Re-export key types
pub use corpus::{Corpus, Document, SummaryStore, clean_text};
pub use extract::{
    EntityKind, EntityMention, Extraction, ExtractionRecord, MAX_ENTITIES, MAX_ISSUES,
    MAX_METRICS, Metric, Sentiment, SentimentLabel, extract,
};
