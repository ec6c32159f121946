//! Generic relay: transparent forwarding for `/gemini/*` and `/chatgpt/*`.

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

use aiproxy_types::GatewayError;

use crate::proxy::error_response;
use crate::proxy::handlers::passthrough_response;
use crate::proxy::middleware::auth::{credential_matches, PROXY_KEY_HEADER};
use crate::proxy::routing::resolve_forward_target;
use crate::proxy::server::AppState;

/// Relay a request to the upstream selected by its path prefix.
///
/// Method, path remainder, query, headers (minus `host` and
/// `accept-encoding`) and body travel verbatim; the upstream's status and
/// body come back verbatim. OPTIONS short-circuits to 200 for preflight.
pub async fn handle_forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let target = match resolve_forward_target(&state.config, uri.path(), uri.query()) {
        Ok(target) => target,
        Err(err) => return error_response(&err),
    };

    info!("[{}] {} {} -> {}", target.provider.as_str(), method, uri.path(), target.url);

    // GET and HEAD carry no body on the wire; everything else forwards its
    // bytes even when empty.
    let request_body =
        if matches!(method, Method::GET | Method::HEAD) { None } else { Some(body) };

    match state.upstream.forward(method, &target.url, &headers, request_body).await {
        Ok(upstream) => passthrough_response(upstream).await,
        Err(err) => {
            error!("[forward] upstream call failed: {}", err);
            error_response(&err)
        }
    }
}

/// Fallback for paths outside every known prefix.
///
/// Order matches the relay pipeline: preflight first, then the proxy key,
/// then the routing verdict.
pub async fn handle_unknown_route(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let supplied = headers.get(PROXY_KEY_HEADER).and_then(|value| value.to_str().ok());
    if !credential_matches(supplied, &state.config.proxy_key) {
        return error_response(&GatewayError::Unauthorized);
    }

    error_response(&GatewayError::RouteNotFound { path: uri.path().to_string() })
}
