//! Corpus preprocessing and basic statistics.
//!
//! Turns raw source documents into cleaned [`Document`]s and computes the
//! corpus-shape statistics logged after cleaning.

use serde::Serialize;

use crate::core::Document;

use super::ingest::SourceDocument;

/// Derives cleaned documents from raw source documents, preserving order.
#[must_use]
pub fn preprocess(docs: Vec<SourceDocument>) -> Vec<Document> {
    docs.into_iter()
        .map(|d| Document::new(d.doc_id, d.filename, d.text))
        .collect()
}

/// Shape statistics over a raw corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    /// Number of documents.
    pub n_docs: usize,
    /// Mean raw text length in characters.
    pub avg_len: f64,
    /// Median raw text length in characters.
    pub median_len: f64,
}

impl CorpusStats {
    /// Computes statistics over raw text lengths.
    ///
    /// An empty corpus yields zeroed statistics.
    #[must_use]
    pub fn compute(docs: &[SourceDocument]) -> Self {
        if docs.is_empty() {
            return Self {
                n_docs: 0,
                avg_len: 0.0,
                median_len: 0.0,
            };
        }

        let mut lengths: Vec<usize> = docs.iter().map(|d| d.text.chars().count()).collect();
        lengths.sort_unstable();

        #[allow(clippy::cast_precision_loss)]
        let avg_len = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        let mid = lengths.len() / 2;
        #[allow(clippy::cast_precision_loss)]
        let median_len = if lengths.len() % 2 == 0 {
            (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
        } else {
            lengths[mid] as f64
        };

        Self {
            n_docs: docs.len(),
            avg_len,
            median_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, text: &str) -> SourceDocument {
        SourceDocument {
            doc_id: id.to_string(),
            filename: format!("{id}.txt"),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_preprocess_cleans_text() {
        let docs = preprocess(vec![raw("d1", " a\n\nb\t c ")]);
        assert_eq!(docs[0].text_clean, "a b c");
        assert_eq!(docs[0].text, " a\n\nb\t c ");
    }

    #[test]
    fn test_preprocess_preserves_order() {
        let docs = preprocess(vec![raw("d1", "x"), raw("d2", "y")]);
        let ids: Vec<&str> = docs.iter().map(|d| d.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[test]
    fn test_stats_counts_and_lengths() {
        let stats = CorpusStats::compute(&[raw("a", "a"), raw("b", "bb"), raw("c", "ccc")]);
        assert_eq!(stats.n_docs, 3);
        assert!((stats.avg_len - 2.0).abs() < f64::EPSILON);
        assert!((stats.median_len - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_even_count_median() {
        let stats = CorpusStats::compute(&[raw("a", "a"), raw("b", "bb"), raw("c", "ccc"), raw("d", "cccc")]);
        assert!((stats.median_len - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty_corpus() {
        let stats = CorpusStats::compute(&[]);
        assert_eq!(stats.n_docs, 0);
        assert!(stats.avg_len.abs() < f64::EPSILON);
    }
}
