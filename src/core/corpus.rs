//! In-memory corpus snapshot and summary store.
//!
//! A [`Corpus`] is an ordered, immutable collection of [`Document`]s
//! supporting case-insensitive substring search; a [`SummaryStore`] is the
//! parallel doc-id to summary lookup. Both are pure reads after
//! construction: a new snapshot supersedes rather than mutates, so two
//! concurrent searches always observe the same state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A document in a corpus snapshot.
///
/// Created once at ingestion, immutable thereafter. `text_clean` is derived
/// from `text` and contains no whitespace runs and no leading or trailing
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable opaque identifier, unique within a snapshot.
    pub doc_id: String,
    /// Source file name.
    pub filename: String,
    /// Raw document text.
    pub text: String,
    /// Whitespace-normalized text.
    pub text_clean: String,
}

impl Document {
    /// Creates a document, deriving `text_clean` from the raw text.
    #[must_use]
    pub fn new(
        doc_id: impl Into<String>,
        filename: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let text_clean = clean_text(&text);
        Self {
            doc_id: doc_id.into(),
            filename: filename.into(),
            text,
            text_clean,
        }
    }
}

/// Collapses whitespace runs to single spaces and trims both ends.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// An ordered, immutable corpus snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    /// Creates a snapshot from documents in ingestion order.
    #[must_use]
    pub const fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    /// Returns the documents in corpus order.
    #[must_use]
    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    /// Returns the number of documents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns `true` if the snapshot holds no documents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Looks up a document by exact `doc_id`.
    #[must_use]
    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.doc_id == doc_id)
    }

    /// Returns all documents whose cleaned text or filename contains `term`,
    /// case-insensitively, preserving corpus order.
    ///
    /// The empty term is a substring of every string, so it matches the
    /// entire corpus; callers relying on that contract get the full
    /// snapshot back.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Document> {
        let needle = term.to_lowercase();
        self.docs
            .iter()
            .filter(|d| {
                d.text_clean.to_lowercase().contains(&needle)
                    || d.filename.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Doc-id to summary lookup, parallel to a corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct SummaryStore {
    summaries: HashMap<String, String>,
}

impl SummaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the summary for a document.
    pub fn insert(&mut self, doc_id: impl Into<String>, summary: impl Into<String>) {
        self.summaries.insert(doc_id.into(), summary.into());
    }

    /// Returns the summary for `doc_id`, if one was stored.
    #[must_use]
    pub fn get(&self, doc_id: &str) -> Option<&str> {
        self.summaries.get(doc_id).map(String::as_str)
    }

    /// Returns the number of stored summaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Returns `true` if no summaries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl FromIterator<(String, String)> for SummaryStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            summaries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        vec![
            Document::new("d1", "transit.txt", "The transit budget grew."),
            Document::new("d2", "parks.txt", "Parks are popular."),
            Document::new("d3", "budget_report.txt", "Nothing relevant."),
            Document::new("d4", "schools.txt", "School BUDGET was cut."),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let out = clean_text(" line1\n\nline2\t\tline3  ");
        assert_eq!(out, "line1 line2 line3");
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn test_document_derives_clean_text() {
        let doc = Document::new("d1", "a.txt", "  a\n b ");
        assert_eq!(doc.text, "  a\n b ");
        assert_eq!(doc.text_clean, "a b");
    }

    #[test]
    fn test_search_matches_text_and_filename() {
        let corpus = sample_corpus();
        let hits = corpus.search("budget");
        let ids: Vec<&str> = hits.iter().map(|d| d.doc_id.as_str()).collect();
        // d3 matches on filename only; order is corpus order
        assert_eq!(ids, vec!["d1", "d3", "d4"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let corpus = sample_corpus();
        let upper = corpus.search("BUDGET");
        let lower = corpus.search("budget");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_search_empty_term_matches_everything() {
        let corpus = sample_corpus();
        assert_eq!(corpus.search("").len(), corpus.len());
    }

    #[test]
    fn test_search_no_matches() {
        let corpus = sample_corpus();
        assert!(corpus.search("zebra").is_empty());
    }

    #[test]
    fn test_get_by_doc_id() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.get("d2").map(|d| d.filename.as_str()),
            Some("parks.txt")
        );
        assert!(corpus.get("missing").is_none());
    }

    #[test]
    fn test_summary_store_lookup() {
        let mut store = SummaryStore::new();
        store.insert("d1", "A summary.");
        assert_eq!(store.get("d1"), Some("A summary."));
        assert!(store.get("d2").is_none());
        assert_eq!(store.len(), 1);
    }
}
