use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::collaborators::GatewayError;

/// Application-level error type.
///
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is rendered as `200 OK` with an `{"error": "..."}` body: callers
/// of this service always get a parseable outcome and never a transport-level failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Failed to fetch profile")]
    ProfileUnavailable,

    #[error("Incomplete profile data")]
    IncompleteProfile,

    #[error("Session id ('{field}') not received from call service")]
    MissingSessionId { field: String },

    #[error("{0}")]
    Transport(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Stable machine-readable code, used for log correlation.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::SessionNotFound => "NOT_FOUND",
            AppError::ProfileUnavailable | AppError::Transport(_) => "TRANSPORT_FAILURE",
            AppError::IncompleteProfile
            | AppError::MissingSessionId { .. } => "MISSING_FIELD",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Message placed in the response body. Storage failures are logged in
    /// full but reported generically.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "A database error occurred".to_string()
            }
            other => {
                tracing::warn!(code = other.code(), "Request failed: {other}");
                other.to_string()
            }
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::MissingSessionId(field) => AppError::MissingSessionId { field },
            other => AppError::Transport(other.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::InvalidRequest(e.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::InvalidRequest(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.public_message() }));
        (StatusCode::OK, body).into_response()
    }
}
