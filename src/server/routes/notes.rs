//! Note publishing handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::notes::{Metadata, Note};

use super::super::{auth::RequireApiKey, error::ApiError, state::AppState};

/// Metadata key filled with the response time when a note has none.
const UPDATED_KEY: &str = "updated";

/// Acknowledgement body for write operations.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Note as returned to clients.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        let mut metadata = note.metadata.unwrap_or_default();
        if !metadata.contains_key(UPDATED_KEY) {
            let now = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
            metadata.insert(UPDATED_KEY.to_string(), now.into());
        }

        Self {
            id: note.id,
            content: note.content,
            metadata,
        }
    }
}

/// Store a note, extracting its frontmatter.
pub async fn publish_note(
    State(state): State<AppState>,
    _auth: RequireApiKey,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let mut note: Note = serde_json::from_slice(&body)
        .map_err(|e| ApiError::invalid_body(format!("Invalid request body: {}", e)))?;

    if note.id.is_empty() {
        return Err(ApiError::missing_id());
    }

    state.notes().save(&mut note)?;
    tracing::info!(id = %note.id, "note published");

    Ok(Json(StatusResponse {
        status: "Note published successfully",
    }))
}

/// Remove a note. Unknown ids succeed.
pub async fn unpublish_note(
    State(state): State<AppState>,
    _auth: RequireApiKey,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.notes().delete(&id)?;
    tracing::info!(id = %id, "note unpublished");

    Ok(Json(StatusResponse {
        status: "Note unpublished successfully",
    }))
}

/// List all readable notes.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = state.notes().list()?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// Fetch a single note.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = state.notes().get(&id)?;
    Ok(Json(note.into()))
}
