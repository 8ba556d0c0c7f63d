//! CORS layer construction.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::CorsConfig;

/// Build the CORS layer from configuration.
///
/// Entries that do not parse as methods, header names or origins are
/// ignored. Credentials cannot be combined with a literal `*` origin, so a
/// wildcard with credentials echoes the request origin instead.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        // Deny all cross-origin requests
        return CorsLayer::new();
    }

    let mut cors = CorsLayer::new();

    let wildcard = config.allow_origins.iter().any(|o| o == "*");
    cors = match (wildcard, config.allow_credentials) {
        (true, true) => cors.allow_origin(AllowOrigin::mirror_request()),
        (true, false) => cors.allow_origin(Any),
        (false, _) => {
            let origins: Vec<HeaderValue> = config
                .allow_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            cors.allow_origin(origins)
        }
    };

    let methods: Vec<Method> = config
        .allow_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = cors.allow_headers(parse_header_names(&config.allow_headers));
    cors = cors.expose_headers(parse_header_names(&config.expose_headers));

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors.max_age(Duration::from_secs(config.max_age))
}

fn parse_header_names(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}
