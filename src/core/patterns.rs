//! Shared pattern library for heuristic extraction.
//!
//! Pure, deterministic, order-preserving matchers over raw text: candidate
//! finders for organization-like phrases, date/quarter mentions, and
//! percent/money figures, plus the fixed sentiment lexicons and the sentence
//! splitter. No NLP model, no shared mutable state; regexes are compiled
//! once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum whitespace-separated tokens in an organization candidate.
const MAX_ORG_TOKENS: usize = 6;

/// Words an organization candidate must not reduce to.
const ORG_STOPWORDS: [&str; 2] = ["the", "and"];

/// Punctuation trimmed from both ends of an organization candidate.
const ORG_TRIM_CHARS: &[char] = &['.', ',', ';', ':', '(', ')'];

/// Positive sentiment cues (lowercase).
pub const POSITIVE_WORDS: [&str; 7] = [
    "improved", "expanded", "positive", "higher", "better", "reliable", "support",
];

/// Negative sentiment cues (lowercase).
pub const NEGATIVE_WORDS: [&str; 6] = [
    "concern", "limitations", "risk", "crowding", "cost", "issue",
];

/// Compiles a pattern literal known to be valid at authoring time.
#[allow(clippy::unwrap_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Capitalized multi-word phrases, all-caps acronyms, acronym-in-parens forms.
static ORG_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)+|\b[A-Z]{2,}\b|\b[A-Z]{2,}\s*\([A-Z]{2,}\))")
});

/// Full month names or quarter tokens, case-insensitive.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\b|\bQ[1-4]\b",
    )
});

/// `<number>%` or `$<number>` forms, decimal optional.
static PERCENT_MONEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b\d+(?:\.\d+)?\s*%|\$\s*\d+(?:\.\d+)?\b"));

/// Words marking a sentence as an issue/risk statement, case-insensitive.
static ISSUE_CUE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(concern|issue|risk|limitation|requested|cost)\b"));

/// Maximal alphabetic runs, used for sentiment tokenization.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-zA-Z]+"));

/// Finds organization-like candidates in `text`, in match order.
///
/// Matches sequences of two-or-more capitalized words, all-caps acronyms of
/// length >= 2, and acronym-in-parentheses forms. Each candidate is trimmed
/// of surrounding punctuation, then rejected if it has more than
/// [`MAX_ORG_TOKENS`] tokens or reduces to a stopword.
#[must_use]
pub fn find_organization_candidates(text: &str) -> Vec<String> {
    ORG_RE
        .find_iter(text)
        .filter_map(|m| {
            let t = m.as_str().trim().trim_matches(ORG_TRIM_CHARS);
            let accept = t.split_whitespace().count() <= MAX_ORG_TOKENS
                && !ORG_STOPWORDS.contains(&t.to_lowercase().as_str());
            accept.then(|| t.to_string())
        })
        .collect()
}

/// Finds date-like candidates (month names, `Q1`-`Q4`) in match order.
#[must_use]
pub fn find_date_candidates(text: &str) -> Vec<String> {
    DATE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Finds percentage and money figures in match order.
#[must_use]
pub fn find_percent_or_money_candidates(text: &str) -> Vec<String> {
    PERCENT_MONEY_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts positive and negative lexicon hits over lowercased alphabetic runs.
///
/// Returns `(positive, negative)`. Callers pass text in any case; tokens are
/// lowercased before lookup.
#[must_use]
pub fn lexicon_hits(text: &str) -> (usize, usize) {
    let mut pos = 0;
    let mut neg = 0;
    for m in WORD_RE.find_iter(text) {
        let token = m.as_str().to_lowercase();
        if POSITIVE_WORDS.contains(&token.as_str()) {
            pos += 1;
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            neg += 1;
        }
    }
    (pos, neg)
}

/// Returns `true` if a sentence contains an issue-cue word.
#[must_use]
pub fn contains_issue_cue(sentence: &str) -> bool {
    ISSUE_CUE_RE.is_match(sentence)
}

/// Splits text into sentences on `.`/`!`/`?` boundaries.
///
/// A sentence is the maximal run up to and including its terminator; a
/// boundary requires whitespace after the terminator, so `"3.5"` or
/// `"v1.2.3"` never split mid-token. Input is trimmed first; empty input
/// yields no sentences.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut prev_was_terminator = false;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if prev_was_terminator && c.is_whitespace() {
            sentences.push(&text[start..i]);
            // Consume the rest of the whitespace run
            let mut next_start = i + c.len_utf8();
            while let Some(&(j, w)) = iter.peek() {
                if !w.is_whitespace() {
                    break;
                }
                iter.next();
                next_start = j + w.len_utf8();
            }
            start = next_start;
            prev_was_terminator = false;
            continue;
        }
        prev_was_terminator = matches!(c, '.' | '!' | '?');
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
