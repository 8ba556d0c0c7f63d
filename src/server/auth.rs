//! API key check for write endpoints.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{error::ApiError, state::AppState};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that admits the request only if it carries the configured API
/// key. With no key configured every request is admitted.
///
/// Keys are compared ignoring ASCII case.
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.api_key() else {
            return Ok(RequireApiKey);
        };

        let Some(provided) = parts.headers.get(API_KEY_HEADER) else {
            return Err(ApiError::api_key_required());
        };

        match provided.to_str() {
            Ok("") => Err(ApiError::api_key_required()),
            Ok(key) if key.eq_ignore_ascii_case(expected) => Ok(RequireApiKey),
            _ => Err(ApiError::invalid_api_key()),
        }
    }
}
