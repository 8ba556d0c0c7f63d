//! HTTP API server for md-publisher.
//!
//! Thin axum layer over [`NoteStore`](crate::notes::NoteStore): publish,
//! fetch, list and unpublish notes as JSON, with an optional API key on
//! the write routes.

mod auth;
mod config;
mod cors;
mod error;
mod logging;
mod routes;
mod state;

pub use auth::{API_KEY_HEADER, RequireApiKey};
pub use config::{
    AuthConfig, Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, ServerConfig,
    StorageConfig,
};
pub use cors::build_cors_layer;
pub use error::ApiError;
pub use logging::{LoggingError, init as init_logging};
pub use routes::{NoteResponse, StatusResponse, router};
pub use state::{AppState, StateError};
