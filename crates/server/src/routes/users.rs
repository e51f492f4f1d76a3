use crate::error::ServerResult;
use crate::routes::ai::{ExtractRequest, ExtractResponse};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Extract skills from profile text using the broad vocabulary.
///
/// This authenticated variant backs the profile editor's "suggest skills"
/// flow. Matching is substring containment, which trades false positives
/// (any text containing the letter `c` yields `c`) for recall on glued-on
/// tokens.
pub async fn extract_skills(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ExtractRequest>,
) -> ServerResult<impl IntoResponse> {
    let skills = state.broad_extractor.extract(&request.text);
    Ok(Json(ExtractResponse { skills }))
}
