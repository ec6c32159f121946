//! Dedicated Gemini chat endpoint: translate in, normalize out.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use aiproxy_types::protocol::chat::IncomingChatRequest;
use aiproxy_types::protocol::gemini::GenerateContentResponse;
use aiproxy_types::GatewayError;

use crate::proxy::error_response;
use crate::proxy::handlers::{require_api_key, ChatQuery};
use crate::proxy::mappers::gemini::{normalize_response, resolve_model, translate_chat_request, upstream_error};
use crate::proxy::server::AppState;

/// `POST /gemini` - accept an OpenAI-dialect chat request, translate it to
/// `generateContent`, call Gemini once, and return a `chat.completion`.
///
/// Non-success upstream statuses come back mirrored, with the raw upstream
/// body preserved under `details`.
pub async fn handle_gemini_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
    Json(body): Json<IncomingChatRequest>,
) -> Response {
    let api_key = match require_api_key(&query) {
        Ok(key) => key.to_string(),
        Err(error) => return error_response(&error),
    };

    let model = resolve_model(&body);
    let payload = translate_chat_request(&body);
    info!("[Gemini] {} turn(s) -> {}", payload.contents.len(), model);

    let upstream = match state.upstream.generate_content(&model, &api_key, &payload).await {
        Ok(response) => response,
        Err(error) => {
            error!("[Gemini] upstream call failed: {}", error);
            return error_response(&error);
        }
    };

    let status = upstream.status();
    let raw_body = match upstream.text().await {
        Ok(text) => text,
        Err(error) => {
            error!("[Gemini] failed to read upstream body: {}", error);
            return error_response(&GatewayError::Transport { message: error.to_string() });
        }
    };

    if !status.is_success() {
        return error_response(&upstream_error(status.as_u16(), &raw_body));
    }

    match serde_json::from_str::<GenerateContentResponse>(&raw_body) {
        Ok(parsed) => {
            let completion = normalize_response(&parsed, &model);
            (StatusCode::OK, Json(completion)).into_response()
        }
        Err(error) => {
            error!("[Gemini] success status with unparseable body: {}", error);
            error_response(&GatewayError::Transport { message: error.to_string() })
        }
    }
}
