//! Keyword matcher — computes found / missing / suggested keyword sets from
//! free-text résumé-analysis output.
//!
//! Pure, synchronous string processing over the static dictionaries, with no
//! I/O and no shared mutable state, so any number of request handlers can
//! call it concurrently. Unknown industry/role identifiers silently resolve
//! to the defaults here; rejecting them is the HTTP layer's job (strict mode).

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::dictionaries::{self, resolve_industry, resolve_role};
use crate::matching::missing::{MissingKeywordExtractor, PatternMissingExtractor};

/// At most this many uncovered industry keywords are suggested per call.
const SUGGESTED_INDUSTRY_CAP: usize = 8;

/// At most this many uncovered role keywords are suggested per call.
const SUGGESTED_ROLE_CAP: usize = 3;

/// Auxiliary narrative fields that accompany the primary analysis text.
/// All optional; empty fields are skipped when building the corpus.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisInsights {
    pub keyword_analysis: Option<String>,
    pub content_analysis: Option<String>,
    pub industry_alignment: Option<String>,
}

/// Deduplicated keyword sets produced by one extraction call.
/// First-occurrence order is preserved but is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub suggested: Vec<String>,
}

impl KeywordResult {
    pub fn empty() -> Self {
        Self {
            found: vec![],
            missing: vec![],
            suggested: vec![],
        }
    }
}

/// The matcher. Holds only the swappable missing-keyword heuristic; all
/// dictionary data is process-wide static.
pub struct KeywordMatcher {
    missing_extractor: Arc<dyn MissingKeywordExtractor>,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(Arc::new(PatternMissingExtractor))
    }
}

impl KeywordMatcher {
    pub fn new(missing_extractor: Arc<dyn MissingKeywordExtractor>) -> Self {
        Self { missing_extractor }
    }

    /// Computes found / missing / suggested keywords for an analysis text.
    ///
    /// `found`: dictionary terms (industry, then role, then action verbs)
    /// present as substrings of the lowercased corpus. A presence test: one
    /// entry per keyword no matter how often it occurs.
    /// `missing`: terms the analysis prose flags as absent.
    /// `suggested`: uncovered industry and role keywords, capped.
    pub fn extract_keywords(
        &self,
        analysis_text: &str,
        insights: &AnalysisInsights,
        target_industry: &str,
        target_role: &str,
    ) -> KeywordResult {
        let corpus = build_corpus(analysis_text, insights);

        let (industry_keywords, industry_fallback) = resolve_industry(target_industry);
        let (role_keywords, role_fallback) = resolve_role(target_role);
        debug!(
            target_industry,
            target_role,
            industry_fallback,
            role_fallback,
            industry_keyword_count = industry_keywords.len(),
            role_keyword_count = role_keywords.len(),
            corpus_len = corpus.len(),
            "resolved keyword dictionaries"
        );

        let mut found: Vec<String> = Vec::new();
        for keyword in industry_keywords
            .iter()
            .chain(role_keywords)
            .chain(dictionaries::action_verbs())
        {
            // Dictionary entries are stored lowercase (see dictionaries.rs).
            if corpus.contains(keyword) {
                found.push((*keyword).to_string());
            }
        }

        let missing = self.missing_extractor.extract(&corpus);

        let covered: HashSet<&str> = found.iter().map(String::as_str).collect();
        let mut suggested: Vec<String> = industry_keywords
            .iter()
            .filter(|keyword| !covered.contains(**keyword))
            .take(SUGGESTED_INDUSTRY_CAP)
            .map(|keyword| (*keyword).to_string())
            .collect();
        suggested.extend(
            role_keywords
                .iter()
                .filter(|keyword| !covered.contains(**keyword))
                .take(SUGGESTED_ROLE_CAP)
                .map(|keyword| (*keyword).to_string()),
        );

        KeywordResult {
            found: dedup_preserving_order(found),
            missing: dedup_preserving_order(missing),
            suggested: dedup_preserving_order(suggested),
        }
    }
}

/// Joins the primary text with every non-blank auxiliary field, space
/// separated, lowercased once.
fn build_corpus(analysis_text: &str, insights: &AnalysisInsights) -> String {
    [
        Some(analysis_text),
        insights.keyword_analysis.as_deref(),
        insights.content_analysis.as_deref(),
        insights.industry_alignment.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|text| !text.trim().is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

fn dedup_preserving_order(keywords: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}
