//! Rule-based query planning.
//!
//! Maps a free-text query to an ordered tool-call plan. Planning is a pure
//! function of the query string: the same input always yields the same
//! plan, and any input yields a valid plan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Words that route a query through corpus search.
const TRIGGER_WORDS: [&str; 7] = [
    "find", "show", "which", "where", "sentiment", "entity", "issue",
];

/// A tool the executor can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Substring search over the corpus snapshot.
    SearchCorpus,
    /// Attach stored summaries to the working result set.
    Summarize,
}

impl Tool {
    /// Returns the wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchCorpus => "search_corpus",
            Self::Summarize => "summarize",
        }
    }
}

/// A single tool invocation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Tool to invoke.
    pub tool: Tool,
    /// Tool arguments; ordering is deterministic for stable serialization.
    pub args: BTreeMap<String, String>,
}

impl Step {
    /// Builds a `search_corpus` step for the given term.
    #[must_use]
    pub fn search_corpus(term: impl Into<String>) -> Self {
        let mut args = BTreeMap::new();
        args.insert("term".to_string(), term.into());
        Self {
            tool: Tool::SearchCorpus,
            args,
        }
    }

    /// Builds an argument-less `summarize` step.
    #[must_use]
    pub fn summarize() -> Self {
        Self {
            tool: Tool::Summarize,
            args: BTreeMap::new(),
        }
    }

    /// Returns the `term` argument, or the empty string if absent.
    #[must_use]
    pub fn term(&self) -> &str {
        self.args.get("term").map_or("", String::as_str)
    }
}

/// An ordered tool-call plan, built once per query and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Builds the plan for a free-text query.
    ///
    /// If the lowercased query contains any trigger word as a substring, the
    /// plan is a `search_corpus` step followed by `summarize`; otherwise a
    /// lone `summarize`. The search term is the last whitespace-delimited
    /// token of the query after stripping everything but lowercase letters,
    /// digits, and spaces. Taking the last token is a deliberate
    /// simplification, not a keyword-importance ranking; changing it changes
    /// which documents are retrieved.
    #[must_use]
    pub fn for_query(query: &str) -> Self {
        let q = query.to_lowercase();
        let steps = if TRIGGER_WORDS.iter().any(|w| q.contains(w)) {
            let stripped: String = q
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
                .collect();
            // A trigger word survives stripping, so a last token exists
            // whenever the trigger check passed; the fallback keeps the
            // planner total anyway.
            stripped.split_whitespace().next_back().map_or_else(
                || vec![Step::summarize()],
                |term| vec![Step::search_corpus(term), Step::summarize()],
            )
        } else {
            vec![Step::summarize()]
        };
        Self { steps }
    }

    /// Returns the steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the plan has no steps.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
