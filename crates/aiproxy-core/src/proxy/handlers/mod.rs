//! Request handlers for the gateway endpoints.
//!
//! - [`gemini`]: dedicated translating endpoint (`POST /gemini`)
//! - [`openai`]: dedicated passthrough endpoint (`POST /openai`)
//! - [`forward`]: generic relay (`/gemini/*`, `/chatgpt/*`) and the fallback

pub mod forward;
pub mod gemini;
pub mod openai;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use aiproxy_types::GatewayError;

use crate::proxy::error_response;

/// Query parameters shared by the dedicated chat endpoints. The auth
/// middleware consumes `access_token` separately; only the upstream key is
/// read here.
#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// The per-request upstream key, rejecting absent and empty values alike.
pub(crate) fn require_api_key(query: &ChatQuery) -> Result<&str, GatewayError> {
    query
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(GatewayError::MissingApiKey)
}

/// Mirror an upstream reply verbatim: status, content type and encoding,
/// body bytes. Used wherever the gateway promises not to reinterpret the
/// upstream. The encoding echo keeps a compressed upstream body decodable
/// by the caller.
pub(crate) async fn passthrough_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let content_encoding = upstream.headers().get(header::CONTENT_ENCODING).cloned();

    match upstream.bytes().await {
        Ok(body) => {
            let mut response = (status, body).into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            if let Some(content_encoding) = content_encoding {
                response.headers_mut().insert(header::CONTENT_ENCODING, content_encoding);
            }
            response
        }
        Err(error) => {
            tracing::error!("Failed to read upstream body: {}", error);
            error_response(&GatewayError::Transport { message: error.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_api_key() {
        let present = ChatQuery { api_key: Some("k".to_string()) };
        assert_eq!(require_api_key(&present).ok(), Some("k"));

        let missing = ChatQuery { api_key: None };
        assert_eq!(require_api_key(&missing).err(), Some(GatewayError::MissingApiKey));

        let empty = ChatQuery { api_key: Some(String::new()) };
        assert_eq!(require_api_key(&empty).err(), Some(GatewayError::MissingApiKey));
    }
}
