//! API error types and JSON response formatting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::notes::NoteError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details in the response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Request body is not a note.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_BODY", message)
    }

    /// Note id missing or empty.
    pub fn missing_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "MISSING_ID", "Note ID is required")
    }

    /// Note not found error.
    pub fn note_not_found(id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NOTE_NOT_FOUND",
            format!("Note '{}' not found", id),
        )
        .with_details(serde_json::json!({ "id": id }))
    }

    /// No `X-API-Key` header on a protected route.
    pub fn api_key_required() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "API_KEY_REQUIRED", "API key is required")
    }

    /// `X-API-Key` does not match the configured key.
    pub fn invalid_api_key() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "INVALID_API_KEY", "Invalid API key")
    }

    /// Storage engine or record encoding failure.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match &err {
            NoteError::MissingId => Self::missing_id(),
            NoteError::NotFound(id) => Self::note_not_found(id),
            NoteError::Encode { .. }
            | NoteError::Decode { .. }
            | NoteError::Frontmatter { .. }
            | NoteError::Store(_) => {
                tracing::error!(error = %err, "note storage failed");
                Self::persistence(err.to_string())
            }
        }
    }
}
