//! Agentic query front end.
//!
//! Maps a free-text query to an ordered tool-call plan and executes it
//! against an in-memory corpus snapshot, attaching stored summaries to
//! matching documents.
//!
//! # Architecture
//!
//! ```text
//! User query → Plan::for_query (rule-based planner)
//!   ├── search_corpus → Corpus::search (substring match, corpus order)
//!   └── summarize     → SummaryStore::get per matched document
//! → PlanResult (query, plan, at most 3 results)
//! ```
//!
//! Planning and execution are synchronous, single-threaded, and pure reads
//! of their collaborators; no configuration reaches this module.

pub mod executor;
pub mod plan;

// Re-export key types
pub use executor::{AgentExecutor, MAX_RESULTS, PlanResult, SearchHit};
pub use plan::{Plan, Step, Tool};
