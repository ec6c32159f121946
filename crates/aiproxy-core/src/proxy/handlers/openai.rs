//! Dedicated OpenAI chat endpoint: verbatim passthrough.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Response;
use tracing::{error, info};

use crate::proxy::error_response;
use crate::proxy::handlers::{passthrough_response, require_api_key, ChatQuery};
use crate::proxy::server::AppState;

/// `POST /openai` - forward the caller's body untouched to
/// `/v1/chat/completions` and mirror whatever comes back, success or not.
/// The upstream is the OpenAI-dialect authority; nothing is translated.
pub async fn handle_openai_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
    body: Bytes,
) -> Response {
    let api_key = match require_api_key(&query) {
        Ok(key) => key.to_string(),
        Err(error) => return error_response(&error),
    };

    info!("[OpenAI] chat/completions passthrough ({} bytes)", body.len());

    match state.upstream.chat_completions(&api_key, body).await {
        Ok(upstream) => passthrough_response(upstream).await,
        Err(error) => {
            error!("[OpenAI] upstream call failed: {}", error);
            error_response(&error)
        }
    }
}
