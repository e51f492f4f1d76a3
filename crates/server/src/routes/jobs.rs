use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use matcher::{CandidateProfile, JobPosting, RankedJob};
use serde::Deserialize;
use std::sync::Arc;

/// Ranked listing request: one candidate against a list of jobs.
///
/// Callers supply jobs in creation-time-descending order; ties in match
/// score preserve that order in the response.
#[derive(Debug, Deserialize)]
pub struct MatchScoresRequest {
    #[serde(default)]
    pub user: CandidateProfile,

    #[serde(default)]
    pub jobs: Vec<JobPosting>,
}

/// Score every job against the candidate, attach `matchScore` and sort
/// descending.
///
/// The job list length is bounded by `max_rank_jobs` in the server config;
/// longer lists are rejected rather than silently truncated.
pub async fn match_scores(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<MatchScoresRequest>,
) -> ServerResult<Json<Vec<RankedJob>>> {
    let limit = state.config.max_rank_jobs;
    if request.jobs.len() > limit {
        return Err(ServerError::BadRequest(format!(
            "too many jobs in one ranking request: {} > {limit}",
            request.jobs.len()
        )));
    }

    let ranked = state.scorer.rank_jobs(&request.user, request.jobs);
    Ok(Json(ranked))
}
