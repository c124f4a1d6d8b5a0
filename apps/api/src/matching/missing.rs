//! Missing-keyword extraction — trigger-phrase heuristics over free text.
//!
//! The upstream analysis narrative often states absences in prose ("the
//! resume is missing leadership, mentorship"). This module pulls those terms
//! out with a fixed set of trigger patterns. It is best-effort pattern
//! matching over natural language, not a parser, so it sits behind a trait
//! and can be swapped for an NLP-backed implementation without touching
//! `KeywordMatcher`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens at or below this length are discarded ("a", "of", "to", ...).
const MIN_TOKEN_LEN: usize = 3;

/// Extracts keywords the analysis text itself flags as absent.
pub trait MissingKeywordExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

static MISSING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)missing\s+([a-zA-Z\s,]+)",
        r"(?i)lacks?\s+([a-zA-Z\s,]+)",
        r"(?i)not\s+present[:\s]+([a-zA-Z\s,]+)",
        r"(?i)absent[:\s]+([a-zA-Z\s,]+)",
        r"(?i)no\s+([a-zA-Z\s,]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("missing-keyword pattern must compile"))
    .collect()
});

/// Default extractor: five fixed trigger phrases, each capturing the run of
/// words/commas that follows. Captures are split on commas and whitespace and
/// short tokens are dropped.
pub struct PatternMissingExtractor;

impl MissingKeywordExtractor for PatternMissingExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut missing = Vec::new();
        for pattern in MISSING_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                if let Some(run) = caps.get(1) {
                    missing.extend(split_keyword_run(run.as_str()));
                }
            }
        }
        missing
    }
}

/// Splits a captured run ("leadership, mentorship and coaching") into
/// candidate keywords.
pub(crate) fn split_keyword_run(run: &str) -> Vec<String> {
    run.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
