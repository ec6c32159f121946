//! Gateway error taxonomy.
//!
//! Every failure the gateway can surface to a caller is one of these
//! variants. Each variant carries a fixed HTTP status and a fixed JSON body;
//! the body strings are part of the wire contract and clients match on them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors produced by the gateway pipeline.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// The `access_token` query parameter on a dedicated chat endpoint is
    /// missing or does not match the configured secret.
    #[error("invalid access token")]
    InvalidAccessToken,

    /// The `x-proxy-key` header on the generic relay is missing or does not
    /// match the configured secret.
    #[error("unauthorized")]
    Unauthorized,

    /// The caller omitted the per-request upstream API key.
    #[error("missing upstream API key")]
    MissingApiKey,

    /// The request path matches no relay prefix.
    #[error("no route for {path}")]
    RouteNotFound { path: String },

    /// The upstream answered with a non-success status. The raw upstream
    /// body is preserved under `details`, never discarded.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, details: Value },

    /// The outbound call itself failed: connect, DNS, or body read.
    #[error("upstream request failed: {message}")]
    Transport { message: String },
}

impl GatewayError {
    /// HTTP status code returned to the caller for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAccessToken | Self::Unauthorized => 401,
            Self::MissingApiKey | Self::RouteNotFound { .. } => 400,
            Self::Upstream { status, .. } => *status,
            Self::Transport { .. } => 500,
        }
    }

    /// Client-facing JSON body for this error.
    ///
    /// The `error` strings here are load-bearing: existing callers key on
    /// the exact text, including the Chinese-language ones.
    pub fn client_body(&self) -> Value {
        match self {
            Self::InvalidAccessToken => json!({ "error": "无效访问令牌" }),
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
            Self::MissingApiKey => json!({ "error": "缺少API密钥" }),
            Self::RouteNotFound { .. } => json!({ "error": "Use /gemini/* or /chatgpt/*" }),
            Self::Upstream { status, details } => json!({
                "error": format!("Gemini API 错误 ({status})"),
                "details": details,
            }),
            Self::Transport { message } => json!({
                "error": "代理请求失败",
                "details": message,
            }),
        }
    }

    /// True for errors raised before any upstream work starts.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccessToken
                | Self::Unauthorized
                | Self::MissingApiKey
                | Self::RouteNotFound { .. }
        )
    }
}
