//! Summary quality statistics.
//!
//! Computes length statistics over the stored summaries, the cheap sanity
//! check the evaluate stage logs after summarization.

use serde::Serialize;

use super::artifacts::SummaryRecord;

/// Length statistics over a set of summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLengthStats {
    /// Number of summaries.
    pub count: usize,
    /// Mean summary length in characters.
    pub mean_chars: f64,
    /// Shortest summary length in characters.
    pub min_chars: usize,
    /// Longest summary length in characters.
    pub max_chars: usize,
}

impl SummaryLengthStats {
    /// Computes statistics over summary character lengths.
    ///
    /// An empty input yields zeroed statistics.
    #[must_use]
    pub fn compute(records: &[SummaryRecord]) -> Self {
        if records.is_empty() {
            return Self {
                count: 0,
                mean_chars: 0.0,
                min_chars: 0,
                max_chars: 0,
            };
        }

        let lengths: Vec<usize> = records.iter().map(|r| r.summary.chars().count()).collect();
        let total: usize = lengths.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_chars = total as f64 / lengths.len() as f64;

        Self {
            count: records.len(),
            mean_chars,
            min_chars: lengths.iter().copied().min().unwrap_or(0),
            max_chars: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}
