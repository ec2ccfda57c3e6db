//! Pluggable extraction and summarization backends.
//!
//! Implementations translate document text into [`Extraction`]s or summary
//! strings. The heuristic variants here require no model or network and are
//! the guaranteed-available terminal entries of every chain; richer backends
//! (NL APIs, generative models) slot in ahead of them with the same output
//! shape, so downstream consumers are backend-agnostic.
//!
//! Backend selection happens entirely in the orchestration layer: a chain is
//! assembled from configuration before any document is processed, and the
//! core never branches on it.

use crate::core::{self, Extraction};
use crate::error::Result;

/// Sentences kept by the heuristic summarizer.
const DEFAULT_SUMMARY_SENTENCES: usize = 4;

/// Trait for extraction backends.
///
/// Implementations may fail (network, quota, parse errors); chains respond
/// to failure by falling through to the next variant.
pub trait ExtractionBackend: Send + Sync {
    /// Backend name (e.g., `"heuristic"`).
    fn name(&self) -> &'static str;

    /// Extracts structured facts from one document's text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Backend`] when the backend is unavailable
    /// or produced an unusable response.
    fn extract(&self, text: &str) -> Result<Extraction>;
}

/// Trait for summarization backends.
pub trait Summarizer: Send + Sync {
    /// Backend name (e.g., `"leading-sentences"`).
    fn name(&self) -> &'static str;

    /// Produces a short summary of one document's text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Backend`] when the backend is unavailable
    /// or produced an unusable response.
    fn summarize(&self, text: &str) -> Result<String>;
}

/// The offline heuristic extraction backend.
///
/// Delegates to [`core::extract`], which is total over any string; this
/// backend cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtraction;

impl ExtractionBackend for HeuristicExtraction {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        Ok(core::extract(text))
    }
}

/// The offline leading-sentences summarizer.
///
/// Keeps the first non-empty `.`-separated sentences of the text, rejoined
/// with `". "` and a trailing period. Empty input yields the empty string.
#[derive(Debug, Clone, Copy)]
pub struct LeadingSentences {
    max_sentences: usize,
}

impl LeadingSentences {
    /// Creates a summarizer keeping up to `max_sentences` sentences.
    #[must_use]
    pub const fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }
}

impl Default for LeadingSentences {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

impl Summarizer for LeadingSentences {
    fn name(&self) -> &'static str {
        "leading-sentences"
    }

    fn summarize(&self, text: &str) -> Result<String> {
        let sentences: Vec<&str> = text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(self.max_sentences)
            .collect();
        if sentences.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}.", sentences.join(". ")))
    }
}

/// A prioritized chain of extraction backends.
///
/// Variants are tried in order; a failure falls through to the next. The
/// heuristic terminal is appended at construction, so the chain as a whole
/// is total.
pub struct ExtractorChain {
    backends: Vec<Box<dyn ExtractionBackend>>,
}

impl ExtractorChain {
    /// Creates a chain from prioritized variants, appending the heuristic
    /// terminal.
    #[must_use]
    pub fn new(mut backends: Vec<Box<dyn ExtractionBackend>>) -> Self {
        backends.push(Box::new(HeuristicExtraction));
        Self { backends }
    }

    /// Creates the heuristic-only chain used in local mode.
    #[must_use]
    pub fn heuristic_only() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the name of the highest-priority backend.
    #[must_use]
    pub fn primary_name(&self) -> &'static str {
        self.backends.first().map_or("heuristic", |b| b.name())
    }

    /// Extracts with the first backend that succeeds.
    #[must_use]
    pub fn extract(&self, text: &str) -> Extraction {
        for backend in &self.backends {
            match backend.extract(text) {
                Ok(extraction) => return extraction,
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "backend failed, falling through");
                }
            }
        }
        // The heuristic terminal never fails; this arm is unreachable but
        // keeps the chain total without panicking.
        core::extract(text)
    }
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::heuristic_only()
    }
}

/// A prioritized chain of summarizers with a heuristic terminal.
pub struct SummarizerChain {
    backends: Vec<Box<dyn Summarizer>>,
}

impl SummarizerChain {
    /// Creates a chain from prioritized variants, appending the
    /// leading-sentences terminal.
    #[must_use]
    pub fn new(mut backends: Vec<Box<dyn Summarizer>>) -> Self {
        backends.push(Box::new(LeadingSentences::default()));
        Self { backends }
    }

    /// Creates the heuristic-only chain used in local mode.
    #[must_use]
    pub fn heuristic_only() -> Self {
        Self::new(Vec::new())
    }

    /// Summarizes with the first backend that succeeds.
    #[must_use]
    pub fn summarize(&self, text: &str) -> String {
        for backend in &self.backends {
            match backend.summarize(text) {
                Ok(summary) => return summary,
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "backend failed, falling through");
                }
            }
        }
        String::new()
    }
}

impl Default for SummarizerChain {
    fn default() -> Self {
        Self::heuristic_only()
    }
}
