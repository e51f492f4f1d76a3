use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Skill extraction request
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Free text to scan; absent text is treated as empty
    #[serde(default)]
    pub text: String,
}

/// Skill extraction response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

/// Two-list match request
#[derive(Debug, Deserialize)]
pub struct MatchListsRequest {
    #[serde(default, rename = "jobSkills")]
    pub job_skills: Vec<String>,

    #[serde(default, rename = "userSkills")]
    pub user_skills: Vec<String>,
}

/// Two-list match response
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchListsResponse {
    /// Jaccard similarity as a fraction in [0.0, 1.0]
    pub score: f64,
}

/// Extract skills from free text using the curated vocabulary.
///
/// Matching is whole-word: `going` does not produce `go`. The response
/// lists the distinct vocabulary tokens found, lowercase, in vocabulary
/// order.
pub async fn extract_skills(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ExtractRequest>,
) -> ServerResult<impl IntoResponse> {
    let skills = state.curated_extractor.extract(&request.text);
    Ok(Json(ExtractResponse { skills }))
}

/// Score two skill lists against each other.
///
/// Returns Jaccard similarity as a fraction in `[0.0, 1.0]`; both lists are
/// folded to lowercase first, and two empty lists score `0.0`.
pub async fn match_lists(
    Json(request): Json<MatchListsRequest>,
) -> ServerResult<impl IntoResponse> {
    let score = matcher::jaccard(&request.job_skills, &request.user_skills);
    Ok(Json(MatchListsResponse { score }))
}
