//! Plan execution against a corpus snapshot.
//!
//! Runs a [`Plan`] strictly sequentially in a single pass: each step either
//! transforms or leaves the working result set, there is no branching back
//! and no retry, and the terminal state is the returned [`PlanResult`].

use serde::{Deserialize, Serialize};

use crate::core::{Corpus, Document, SummaryStore};

use super::plan::{Plan, Tool};

/// Maximum results returned by a query, applied unconditionally.
pub const MAX_RESULTS: usize = 3;

/// A matched document with its attached summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Stable document identifier.
    pub doc_id: String,
    /// Source file name.
    pub filename: String,
    /// Raw document text.
    pub text: String,
    /// Whitespace-normalized text.
    pub text_clean: String,
    /// Stored summary, if the summarize step ran and one exists.
    pub summary: Option<String>,
}

impl From<&Document> for SearchHit {
    fn from(doc: &Document) -> Self {
        Self {
            doc_id: doc.doc_id.clone(),
            filename: doc.filename.clone(),
            text: doc.text.clone(),
            text_clean: doc.text_clean.clone(),
            summary: None,
        }
    }
}

/// Terminal state of one query execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// The original query.
    pub query: String,
    /// The plan that was executed.
    pub plan: Plan,
    /// At most [`MAX_RESULTS`] matches in corpus order.
    pub results: Vec<SearchHit>,
}

/// Executes query plans against a corpus snapshot and summary store.
///
/// Holds shared references only; execution is a pure read of both
/// collaborators, so concurrent executors observe the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AgentExecutor<'a> {
    corpus: &'a Corpus,
    summaries: &'a SummaryStore,
}

impl<'a> AgentExecutor<'a> {
    /// Creates an executor over the given snapshot and summary store.
    #[must_use]
    pub const fn new(corpus: &'a Corpus, summaries: &'a SummaryStore) -> Self {
        Self { corpus, summaries }
    }

    /// Plans and executes a free-text query.
    ///
    /// `search_corpus` replaces the working set with the corpus matches for
    /// the step's term (an empty term matches the entire corpus, since every
    /// string contains the empty substring). `summarize` attaches stored
    /// summaries to a non-empty working set and is a no-op otherwise. The
    /// result set is truncated to [`MAX_RESULTS`] regardless of how many
    /// documents matched.
    #[must_use]
    pub fn execute(&self, query: &str) -> PlanResult {
        let plan = Plan::for_query(query);
        let mut working: Vec<SearchHit> = Vec::new();

        for step in plan.steps() {
            match step.tool {
                Tool::SearchCorpus => {
                    working = self
                        .corpus
                        .search(step.term())
                        .into_iter()
                        .map(SearchHit::from)
                        .collect();
                }
                Tool::Summarize => {
                    if !working.is_empty() {
                        for hit in &mut working {
                            hit.summary = self.summaries.get(&hit.doc_id).map(str::to_string);
                        }
                    }
                }
            }
        }

        working.truncate(MAX_RESULTS);
        PlanResult {
            query: query.to_string(),
            plan,
            results: working,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Document;

    use super::*;

    fn corpus_with_budget_docs() -> Corpus {
        vec![
            Document::new("d1", "a.txt", "The budget grew in Q1."),
            Document::new("d2", "b.txt", "Nothing to see."),
            Document::new("d3", "c.txt", "Budget cuts loom."),
            Document::new("d4", "d.txt", "A budget surplus appeared."),
            Document::new("d5", "e.txt", "Another budget line."),
        ]
        .into_iter()
        .collect()
    }

    fn store_for(ids: &[&str]) -> SummaryStore {
        ids.iter()
            .map(|id| ((*id).to_string(), format!("summary of {id}")))
            .collect()
    }

    #[test]
    fn test_execute_search_then_summarize() {
        let corpus = corpus_with_budget_docs();
        let store = store_for(&["d1", "d3", "d4", "d5"]);
        let executor = AgentExecutor::new(&corpus, &store);

        let result = executor.execute("find budget issues");
        // Term is "issues" (last token), which matches nothing; the plan
        // still carries both steps.
        assert_eq!(result.plan.len(), 2);
        assert!(result.results.is_empty());

        let result = executor.execute("find the budget");
        assert_eq!(result.results.len(), MAX_RESULTS);
        let ids: Vec<&str> = result.results.iter().map(|h| h.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d3", "d4"]);
        for hit in &result.results {
            assert!(hit.summary.is_some());
        }
    }

    #[test]
    fn test_execute_truncates_to_three() {
        let corpus = corpus_with_budget_docs();
        let store = SummaryStore::new();
        let executor = AgentExecutor::new(&corpus, &store);

        // 4 documents match "budget"; only 3 come back
        let result = executor.execute("show budget");
        assert_eq!(result.results.len(), MAX_RESULTS);
    }

    #[test]
    fn test_execute_missing_summary_is_none() {
        let corpus = corpus_with_budget_docs();
        let store = store_for(&["d1"]);
        let executor = AgentExecutor::new(&corpus, &store);

        let result = executor.execute("show budget");
        assert_eq!(result.results[0].summary.as_deref(), Some("summary of d1"));
        assert!(result.results[1].summary.is_none());
    }

    #[test]
    fn test_execute_no_trigger_returns_empty() {
        let corpus = corpus_with_budget_docs();
        let store = store_for(&["d1"]);
        let executor = AgentExecutor::new(&corpus, &store);

        let result = executor.execute("Tell me about the corpus");
        assert_eq!(result.plan.len(), 1);
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_execute_case_insensitive_search() {
        let corpus = corpus_with_budget_docs();
        let store = SummaryStore::new();
        let executor = AgentExecutor::new(&corpus, &store);

        let upper = executor.execute("find BUDGET");
        let lower = executor.execute("find budget");
        assert_eq!(upper.results, lower.results);
    }

    #[test]
    fn test_execute_result_echoes_query_and_plan() {
        let corpus = corpus_with_budget_docs();
        let store = SummaryStore::new();
        let executor = AgentExecutor::new(&corpus, &store);

        let result = executor.execute("find budget");
        assert_eq!(result.query, "find budget");
        assert_eq!(result.plan, Plan::for_query("find budget"));
    }

    #[test]
    fn test_plan_result_serialization() {
        let corpus = corpus_with_budget_docs();
        let store = store_for(&["d1"]);
        let executor = AgentExecutor::new(&corpus, &store);

        let result = executor.execute("find budget");
        let json = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(json["query"], "find budget");
        assert!(json["plan"].is_array());
        assert_eq!(json["results"][0]["doc_id"], "d1");
        assert_eq!(json["results"][0]["summary"], "summary of d1");
    }
}
