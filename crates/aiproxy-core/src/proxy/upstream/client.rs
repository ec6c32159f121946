//! One-shot HTTP client for the upstream providers.
//!
//! Every call here is exactly one attempt: no retry, no fallback chain, and
//! no local timeout. Failures surface to the caller immediately and timeout
//! behavior belongs to the transport.

use bytes::Bytes;
use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use reqwest::{Client, Method};

use aiproxy_types::protocol::gemini::GenerateContentRequest;
use aiproxy_types::{GatewayError, Result};

use crate::config::GatewayConfig;

/// Shared client for both upstreams. Cheap to clone through the app state;
/// the inner reqwest client pools connections across requests.
pub struct UpstreamClient {
    http_client: Client,
    gemini_base_url: String,
    openai_base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http_client: Client::new(),
            gemini_base_url: config.gemini_base_url.clone(),
            openai_base_url: config.openai_base_url.clone(),
        }
    }

    /// POST a translated payload to `models/{model}:generateContent`.
    ///
    /// The caller's per-request key rides in the `key` query parameter, the
    /// way the Gemini API expects it.
    pub async fn generate_content(
        &self,
        model: &str,
        api_key: &str,
        payload: &GenerateContentRequest,
    ) -> Result<reqwest::Response> {
        let url = generate_content_url(&self.gemini_base_url, model);
        self.http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(payload)
            .send()
            .await
            .map_err(transport_error)
    }

    /// POST an untouched OpenAI-shaped body to `/v1/chat/completions` with
    /// the caller's key as a bearer token.
    pub async fn chat_completions(
        &self,
        api_key: &str,
        body: Bytes,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/v1/chat/completions", self.openai_base_url);
        self.http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)
    }

    /// Relay an arbitrary request to an already-resolved upstream URL.
    ///
    /// Headers travel verbatim minus `host` (the transport sets the
    /// upstream's own), `content-length` (recomputed from the body) and
    /// `accept-encoding` (the relay never decompresses, so the upstream
    /// must answer in identity encoding).
    pub async fn forward(
        &self,
        method: Method,
        url: &str,
        headers: &reqwest::header::HeaderMap,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response> {
        let mut outbound = headers.clone();
        outbound.remove(HOST);
        outbound.remove(CONTENT_LENGTH);
        outbound.remove(ACCEPT_ENCODING);

        let mut request = self.http_client.request(method, url).headers(outbound);
        if let Some(body) = body {
            request = request.body(body);
        }
        request.send().await.map_err(transport_error)
    }
}

fn generate_content_url(base: &str, model: &str) -> String {
    format!("{base}/v1beta/models/{model}:generateContent")
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport { message: error.to_string() }
}
