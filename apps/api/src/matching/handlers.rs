use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::analysis_scan::scan_keyword_analysis;
use crate::matching::dictionaries::{
    self, DEFAULT_INDUSTRY, DEFAULT_ROLE, INDUSTRIES, ROLES,
};
use crate::matching::matcher::{AnalysisInsights, KeywordResult};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractKeywordsRequest {
    pub analysis_text: String,
    #[serde(default)]
    pub insights: AnalysisInsights,
    pub target_industry: Option<String>,
    pub target_role: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: KeywordResult,
    /// Identifiers actually used, after any fallback.
    pub resolved_industry: String,
    pub resolved_role: String,
}

/// POST /api/v1/keywords/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    let industry = req.target_industry.as_deref().unwrap_or(DEFAULT_INDUSTRY);
    let role = req.target_role.as_deref().unwrap_or(DEFAULT_ROLE);

    let industry_known = dictionaries::industry_keywords(industry).is_some();
    let role_known = dictionaries::role_keywords(role).is_some();

    if state.config.strict_dictionary_keys {
        if !industry_known {
            return Err(AppError::Validation(format!(
                "Unknown industry '{industry}'. Known industries: {}",
                INDUSTRIES.join(", ")
            )));
        }
        if !role_known {
            return Err(AppError::Validation(format!(
                "Unknown role '{role}'. Known roles: {}",
                ROLES.join(", ")
            )));
        }
    }

    let keywords =
        state
            .matcher
            .extract_keywords(&req.analysis_text, &req.insights, industry, role);

    let resolved_industry = if industry_known { industry } else { DEFAULT_INDUSTRY };
    let resolved_role = if role_known { role } else { DEFAULT_ROLE };

    Ok(Json(ExtractKeywordsResponse {
        keywords,
        resolved_industry: resolved_industry.to_string(),
        resolved_role: resolved_role.to_string(),
    }))
}

#[derive(Deserialize)]
pub struct AnalysisScanRequest {
    pub keyword_analysis: String,
}

/// POST /api/v1/keywords/analysis
pub async fn handle_analysis_scan(
    Json(req): Json<AnalysisScanRequest>,
) -> Json<KeywordResult> {
    Json(scan_keyword_analysis(&req.keyword_analysis))
}

#[derive(Serialize)]
pub struct DictionaryListResponse {
    pub industries: Vec<&'static str>,
    pub roles: Vec<&'static str>,
    pub action_verb_count: usize,
}

/// GET /api/v1/keywords/dictionaries
pub async fn handle_list_dictionaries() -> Json<DictionaryListResponse> {
    Json(DictionaryListResponse {
        industries: INDUSTRIES.to_vec(),
        roles: ROLES.to_vec(),
        action_verb_count: dictionaries::action_verbs().len(),
    })
}

#[derive(Serialize)]
pub struct IndustryDictionaryResponse {
    pub industry: String,
    pub keywords: Vec<&'static str>,
}

/// GET /api/v1/keywords/dictionaries/:industry
/// Exact lookup: unknown identifiers are a 404 here, never a fallback.
pub async fn handle_industry_dictionary(
    Path(industry): Path<String>,
) -> Result<Json<IndustryDictionaryResponse>, AppError> {
    let keywords = dictionaries::industry_keywords(&industry)
        .ok_or_else(|| AppError::NotFound(format!("No dictionary for industry '{industry}'")))?;
    Ok(Json(IndustryDictionaryResponse {
        industry,
        keywords: keywords.to_vec(),
    }))
}
