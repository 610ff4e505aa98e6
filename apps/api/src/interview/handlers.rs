//! Axum route handlers for the interview session API.
//!
//! Handlers return `Result<_, AppError>`; failures render as `200 {"error": ...}`.
//! Extractor rejections are taken as `Result` so malformed input follows the same policy.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::collaborators::CallRequest;
use crate::errors::AppError;
use crate::interview::workflow::{
    generate_first_question, initiate_call, lookup_profile, CallStarted, FirstQuestion,
    StoredProfile,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionIdQuery {
    pub session_id: String,
}

/// GET /generate-remote-question?session_id=...
pub async fn handle_generate_remote_question(
    State(state): State<AppState>,
    params: Result<Query<SessionIdQuery>, QueryRejection>,
) -> Result<Json<FirstQuestion>, AppError> {
    let Query(params) = params?;
    let outcome = generate_first_question(
        state.profiles.as_ref(),
        state.questions.as_ref(),
        state.delivery.as_ref(),
        &params.session_id,
    )
    .await?;
    Ok(Json(outcome))
}

/// GET /get-profile?session_id=...
pub async fn handle_get_profile(
    State(state): State<AppState>,
    params: Result<Query<SessionIdQuery>, QueryRejection>,
) -> Result<Json<StoredProfile>, AppError> {
    let Query(params) = params?;
    let profile = lookup_profile(state.store.as_ref(), &params.session_id).await?;
    Ok(Json(profile))
}

/// POST /initiate-call
pub async fn handle_initiate_call(
    State(state): State<AppState>,
    request: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CallStarted>, AppError> {
    let Json(request) = request?;
    let started = initiate_call(state.calls.as_ref(), state.store.as_ref(), request).await?;
    Ok(Json(started))
}
