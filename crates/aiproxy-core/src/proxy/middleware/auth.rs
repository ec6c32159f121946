//! Credential checks.
//!
//! Two independent credentials guard the two endpoint families:
//!
//! - dedicated chat endpoints check the `access_token` query parameter
//! - the generic relay checks the `x-proxy-key` header
//!
//! Both run before any body work, compare in constant time, and treat a
//! missing credential exactly like a wrong one. An empty configured secret
//! denies everything rather than matching an absent credential.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;

use aiproxy_types::GatewayError;

use crate::config::GatewayConfig;
use crate::proxy::error_response;

/// Header carrying the relay credential.
pub const PROXY_KEY_HEADER: &str = "x-proxy-key";

/// Validate the `access_token` query parameter on the dedicated chat
/// endpoints. OPTIONS passes through for CORS preflight.
pub async fn access_token_auth(
    State(config): State<Arc<GatewayConfig>>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!("Request: {} {}", request.method(), request.uri().path());

    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let supplied = query_param(request.uri().query(), "access_token");
    if credential_matches(supplied.as_deref(), &config.access_token) {
        next.run(request).await
    } else {
        tracing::warn!(
            "Rejected {} {}: invalid access token",
            request.method(),
            request.uri().path()
        );
        error_response(&GatewayError::InvalidAccessToken)
    }
}

/// Validate the `x-proxy-key` header on the generic relay. OPTIONS passes
/// through for CORS preflight.
pub async fn proxy_key_auth(
    State(config): State<Arc<GatewayConfig>>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!("Request: {} {}", request.method(), request.uri().path());

    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let supplied = proxy_key_from_headers(&request);
    if credential_matches(supplied.as_deref(), &config.proxy_key) {
        next.run(request).await
    } else {
        tracing::warn!(
            "Rejected {} {}: invalid proxy key",
            request.method(),
            request.uri().path()
        );
        error_response(&GatewayError::Unauthorized)
    }
}

fn proxy_key_from_headers(request: &Request) -> Option<String> {
    request
        .headers()
        .get(PROXY_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Check a caller-supplied credential against the configured secret.
///
/// An empty secret fails closed: with no secret configured there is nothing
/// a caller could legitimately present.
pub(crate) fn credential_matches(supplied: Option<&str>, secret: &str) -> bool {
    if secret.is_empty() {
        return false;
    }
    match supplied {
        Some(value) => constant_time_compare(value, secret),
        None => false,
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Pull one query parameter out of the raw query string, percent-decoded.
/// Works straight off the URI so the body is never touched.
pub(crate) fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
