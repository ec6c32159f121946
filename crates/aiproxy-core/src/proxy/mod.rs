//! Gateway module: credentialed relay in front of the LLM providers.
//!
//! Pipeline, in request order:
//! 1. Credential check ([`middleware::auth`]) before any body work
//! 2. Route resolution ([`routing`]) for the generic relay
//! 3. Translation ([`mappers::gemini`]) on the dedicated chat path
//! 4. One-shot upstream call ([`upstream`])
//! 5. Response normalization or verbatim passthrough ([`handlers`])

// ============================================================================
// Submodules
// ============================================================================

pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod upstream;

// ============================================================================
// Re-exports
// ============================================================================

pub use routing::{resolve_forward_target, Provider, UpstreamTarget};
pub use server::{build_gateway_router, AppState, GatewayServer, ServerStartConfig};
pub use upstream::UpstreamClient;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use aiproxy_types::GatewayError;

/// Convert a gateway error into its HTTP reply: taxonomy status plus the
/// fixed client body.
pub(crate) fn error_response(error: &GatewayError) -> Response {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(error.client_body())).into_response()
}
