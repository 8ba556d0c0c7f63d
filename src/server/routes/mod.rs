//! API routes and handlers.

mod notes;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

pub use notes::{NoteResponse, StatusResponse};

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/publish", post(notes::publish_note))
        .route("/notes", get(notes::list_notes))
        .route(
            "/note/{id}",
            get(notes::get_note).delete(notes::unpublish_note),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
