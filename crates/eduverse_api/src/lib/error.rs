use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eduverse_transcripts::TranscriptError;
use serde_json::json;

/// Everything a request handler can surface to the caller.
///
/// Every variant renders as a JSON `{"error": …}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("Upstream chat completion request failed")]
    ChatUpstream,
    #[error("Search request failed")]
    SearchUpstream,
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ChatUpstream => StatusCode::BAD_GATEWAY,
            ApiError::SearchUpstream => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Transcript(TranscriptError::EmptyTranscript) => StatusCode::NOT_FOUND,
            ApiError::Transcript(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
