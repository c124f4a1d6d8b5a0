//! Single-field scan over a keyword-analysis narrative.
//!
//! A narrower variant of extraction used when only the keyword-analysis text
//! is available: `found` comes from a fixed allowlist of well-known
//! technology names rather than the industry dictionaries, and suggestions
//! are read straight out of "suggest ..." phrases. Independent of target
//! industry and role.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::matcher::KeywordResult;
use crate::matching::missing::split_keyword_run;

static TECH_MENTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(python|java|javascript|typescript|c#|c\+\+|go|rust|php|ruby|react|angular|vue|node\.js|express|django|flask|spring|laravel|aws|azure|gcp|docker|kubernetes)\b",
    )
    .expect("technology allowlist pattern must compile")
});

static MISSING_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)missing\s+([a-zA-Z\s,]+)").expect("missing pattern must compile"));

static SUGGESTED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)suggest[^.]*?([a-zA-Z\s,]+)").expect("suggest pattern must compile")
});

/// Extracts found / missing / suggested keywords from a keyword-analysis
/// narrative alone. Never fails; empty input yields empty sets.
pub fn scan_keyword_analysis(keyword_analysis: &str) -> KeywordResult {
    if keyword_analysis.is_empty() {
        return KeywordResult::empty();
    }

    let found: Vec<String> = TECH_MENTIONS
        .find_iter(keyword_analysis)
        .map(|mention| mention.as_str().to_lowercase())
        .collect();

    let mut missing = Vec::new();
    for caps in MISSING_RUN.captures_iter(keyword_analysis) {
        if let Some(run) = caps.get(1) {
            missing.extend(split_keyword_run(run.as_str()));
        }
    }

    let mut suggested = Vec::new();
    for caps in SUGGESTED_RUN.captures_iter(keyword_analysis) {
        if let Some(run) = caps.get(1) {
            suggested.extend(split_keyword_run(run.as_str()));
        }
    }

    KeywordResult {
        found: dedup(found),
        missing: dedup(missing),
        suggested: dedup(suggested),
    }
}

fn dedup(keywords: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}
