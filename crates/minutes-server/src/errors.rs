//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use minutes_store::PersistenceError;
use minutes_summarize::SummarizationError;
use minutes_transcribe::PipelineError;

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed upload request (missing file, bad field).
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// No meeting with the requested id.
    #[error("meeting not found: {0}")]
    NotFound(String),

    /// Transcription pipeline failure.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Summarization service failure.
    #[error(transparent)]
    Summarization(#[from] SummarizationError),

    /// Store failure.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // Undecodable audio is the client's fault, same as a malformed upload.
            Self::InvalidUpload(_) | Self::Pipeline(PipelineError::Conversion(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Pipeline(_) | Self::Summarization(_) | Self::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
