//! CORS policies.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// CORS for the dedicated chat endpoints: browser callers POST JSON from
/// arbitrary origins.
pub fn chat_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// CORS for the generic relay: fully open, mirroring the relay's
/// transparency. The real gate is the proxy key, not the origin.
pub fn forward_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
