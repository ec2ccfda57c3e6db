//! Heuristic information extraction.
//!
//! Turns one document's raw text into entities, percent metrics, a lexicon
//! sentiment judgment, and issue sentences. This path needs no model or
//! external service: it is the guaranteed-available terminal variant behind
//! the extraction backend seam, and richer backends produce the same record
//! shape. Total over any string input; there is no failure state.

use serde::{Deserialize, Serialize};

use super::patterns;

/// Maximum entities kept per document.
pub const MAX_ENTITIES: usize = 20;
/// Maximum percent metrics kept per document.
pub const MAX_METRICS: usize = 5;
/// Maximum issue sentences kept per document.
pub const MAX_ISSUES: usize = 5;

/// Sentiment score above which a document is labeled positive (below the
/// negation, negative).
const SENTIMENT_THRESHOLD: f64 = 0.25;
/// Confidence reported when no lexicon word appears at all.
const NEUTRAL_DEFAULT_CONFIDENCE: f64 = 0.3;

/// Kind of an extracted entity mention.
///
/// The heuristic path emits `Organization`, `Date`, and `Percent`; the
/// remaining kinds are produced by richer extraction backends that share
/// this record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    /// Organization-like phrase or acronym.
    Organization,
    /// Month or quarter mention.
    Date,
    /// Percentage or money figure.
    Percent,
    /// Person name.
    Person,
    /// Geographic location.
    Location,
    /// Monetary amount (distinct from inline `$`/`%` figures).
    Money,
}

/// A single entity mention extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityMention {
    /// Entity kind.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Matched text span.
    pub text: String,
}

/// A named metric projected from the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name (currently always `"percent"`).
    pub name: String,
    /// Raw matched value, e.g. `"99.9%"`.
    pub value: String,
}

/// Document polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive lexicon hits dominate.
    Positive,
    /// Balanced or no lexicon hits.
    Neutral,
    /// Negative lexicon hits dominate.
    Negative,
}

impl SentimentLabel {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment judgment for a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Polarity label.
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`, rounded to two decimal places.
    pub confidence: f64,
}

/// Structured facts extracted from one document's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Deduplicated entity mentions in first-seen order, capped at
    /// [`MAX_ENTITIES`].
    pub entities: Vec<EntityMention>,
    /// Percent metrics in first-seen order, capped at [`MAX_METRICS`].
    pub metrics: Vec<Metric>,
    /// Lexicon sentiment judgment.
    pub sentiment: Sentiment,
    /// Issue/risk sentences in document order, capped at [`MAX_ISSUES`].
    pub issues: Vec<String>,
}

/// An [`Extraction`] bound to its source document.
///
/// Produced once per document per extraction pass; not mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Stable document identifier.
    pub doc_id: String,
    /// Source file name.
    pub filename: String,
    /// Extracted facts.
    #[serde(flatten)]
    pub extraction: Extraction,
}

impl ExtractionRecord {
    /// Binds an extraction to its source document.
    #[must_use]
    pub fn new(doc_id: impl Into<String>, filename: impl Into<String>, extraction: Extraction) -> Self {
        Self {
            doc_id: doc_id.into(),
            filename: filename.into(),
            extraction,
        }
    }
}

/// Extracts entities, metrics, sentiment, and issue sentences from raw text.
///
/// Runs the candidate finders over the uncleaned input, deduplicates
/// mentions by `(kind, text)` preserving first-seen order, projects percent
/// matches into metrics, scores sentiment against the fixed lexicons, and
/// keeps sentences containing an issue cue. Pure and total: identical input
/// yields identical output, and the empty string yields empty sequences with
/// a neutral default sentiment.
#[must_use]
pub fn extract(text: &str) -> Extraction {
    let mut candidates: Vec<EntityMention> = Vec::new();
    candidates.extend(
        patterns::find_organization_candidates(text)
            .into_iter()
            .map(|t| EntityMention {
                kind: EntityKind::Organization,
                text: t,
            }),
    );
    candidates.extend(
        patterns::find_date_candidates(text)
            .into_iter()
            .map(|t| EntityMention {
                kind: EntityKind::Date,
                text: t,
            }),
    );
    candidates.extend(
        patterns::find_percent_or_money_candidates(text)
            .into_iter()
            .map(|t| EntityMention {
                kind: EntityKind::Percent,
                text: t,
            }),
    );

    let deduped = dedup_mentions(candidates);

    // Metrics draw from the full deduplicated list; the entity cap applies
    // after the projection.
    let metrics: Vec<Metric> = deduped
        .iter()
        .filter(|e| e.kind == EntityKind::Percent)
        .take(MAX_METRICS)
        .map(|e| Metric {
            name: "percent".to_string(),
            value: e.text.clone(),
        })
        .collect();

    let mut entities = deduped;
    entities.truncate(MAX_ENTITIES);

    let sentiment = score_sentiment(text);

    let issues: Vec<String> = patterns::split_sentences(text)
        .into_iter()
        .filter(|s| patterns::contains_issue_cue(s))
        .take(MAX_ISSUES)
        .map(str::to_string)
        .collect();

    Extraction {
        entities,
        metrics,
        sentiment,
        issues,
    }
}

/// Deduplicates mentions by `(kind, text)`, keeping first-seen order.
fn dedup_mentions(candidates: Vec<EntityMention>) -> Vec<EntityMention> {
    let mut seen = std::collections::HashSet::new();
    let mut deduped = Vec::new();
    for mention in candidates {
        if seen.insert((mention.kind, mention.text.clone())) {
            deduped.push(mention);
        }
    }
    deduped
}

/// Scores document polarity against the fixed sentiment lexicons.
fn score_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let (pos, neg) = patterns::lexicon_hits(&lower);
    let total = pos + neg;
    if total == 0 {
        return Sentiment {
            label: SentimentLabel::Neutral,
            confidence: NEUTRAL_DEFAULT_CONFIDENCE,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let score = (pos as f64 - neg as f64) / total as f64;
    let label = if score > SENTIMENT_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -SENTIMENT_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    let confidence = round2(score.abs().min(1.0));
    Sentiment { label, confidence }
}

/// Rounds to two decimal places.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
