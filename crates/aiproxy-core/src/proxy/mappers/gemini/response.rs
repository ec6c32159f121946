//! Gemini response → `chat.completion` normalization.

use chrono::Utc;
use serde_json::Value;

use aiproxy_types::protocol::gemini::{GeminiCandidate, GenerateContentResponse};
use aiproxy_types::protocol::openai::{ChatCompletion, Choice, ChoiceMessage, Usage};
use aiproxy_types::GatewayError;

/// Reshape a successful Gemini response into the unified output schema.
///
/// Every candidate becomes a choice, in order. A candidate without a text
/// part (safety-blocked, or a non-text modality) becomes an empty-content
/// choice rather than failing the whole response.
pub fn normalize_response(response: &GenerateContentResponse, model: &str) -> ChatCompletion {
    let now = Utc::now();

    let choices = response
        .candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| Choice {
            index: index as u32,
            message: ChoiceMessage {
                role: "assistant".to_string(),
                content: candidate_text(candidate),
            },
            finish_reason: candidate.finish_reason.as_deref().map(map_finish_reason),
        })
        .collect();

    ChatCompletion {
        id: format!("gemini-{}", now.timestamp_millis()),
        object: "chat.completion".to_string(),
        created: now.timestamp(),
        model: model.to_string(),
        choices,
        usage: response.usage_metadata.as_ref().map(|meta| Usage {
            prompt_tokens: meta.prompt_token_count,
            completion_tokens: meta.candidates_token_count,
            total_tokens: meta.total_token_count,
        }),
    }
}

/// Wrap a non-success upstream reply, preserving the raw body under
/// `details`. JSON bodies stay JSON; anything else rides along as a string.
pub fn upstream_error(status: u16, raw_body: &str) -> GatewayError {
    let details = serde_json::from_str::<Value>(raw_body)
        .unwrap_or_else(|_| Value::String(raw_body.to_string()));
    GatewayError::Upstream { status, details }
}

/// First text part of the candidate, empty when absent.
fn candidate_text(candidate: &GeminiCandidate) -> String {
    candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.first())
        .map(|part| part.text.clone())
        .unwrap_or_default()
}

/// Gemini finish reasons folded onto OpenAI's vocabulary. Unknown reasons
/// read as a normal stop.
fn map_finish_reason(reason: &str) -> String {
    match reason {
        "STOP" => "stop",
        "MAX_TOKENS" => "length",
        "SAFETY" | "RECITATION" => "content_filter",
        _ => "stop",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        }))
        .expect("fixture parses")
    }

    #[test]
    fn test_normalization_shape() {
        let completion = normalize_response(&response_with_text("hello there"), "gemini-1.5-pro-latest");

        assert!(completion.id.starts_with("gemini-"), "id was {}", completion.id);
        assert_eq!(completion.object, "chat.completion");
        assert!(completion.created > 0);
        assert_eq!(completion.model, "gemini-1.5-pro-latest");
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].index, 0);
        assert_eq!(completion.choices[0].message.role, "assistant");
        assert_eq!(completion.choices[0].message.content, "hello there");
        assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_id_carries_millisecond_timestamp() {
        let completion = normalize_response(&response_with_text("x"), "m");
        let millis: i64 = completion.id.trim_start_matches("gemini-").parse().expect("numeric id");
        // Millisecond epoch and second epoch describe the same instant.
        assert_eq!(millis / 1000, completion.created);
    }

    #[test]
    fn test_candidate_without_content_becomes_empty_choice() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .expect("parse");

        let completion = normalize_response(&response, "m");
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].message.content, "");
        assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("content_filter"));
    }

    #[test]
    fn test_candidate_with_empty_parts_becomes_empty_choice() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": [] } }]
        }))
        .expect("parse");

        let completion = normalize_response(&response, "m");
        assert_eq!(completion.choices[0].message.content, "");
        assert_eq!(completion.choices[0].finish_reason, None);
    }

    #[test]
    fn test_multiple_candidates_keep_order_and_index() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }] }, "finishReason": "STOP" },
                { "content": { "parts": [{ "text": "second" }] }, "finishReason": "MAX_TOKENS" }
            ]
        }))
        .expect("parse");

        let completion = normalize_response(&response, "m");
        assert_eq!(completion.choices.len(), 2);
        assert_eq!(completion.choices[0].index, 0);
        assert_eq!(completion.choices[0].message.content, "first");
        assert_eq!(completion.choices[1].index, 1);
        assert_eq!(completion.choices[1].message.content, "second");
        assert_eq!(completion.choices[1].finish_reason.as_deref(), Some("length"));
    }

    #[test]
    fn test_no_candidates_yields_empty_choices() {
        let completion = normalize_response(&GenerateContentResponse::default(), "m");
        assert!(completion.choices.is_empty());
        assert!(completion.usage.is_none());
    }

    #[test]
    fn test_usage_metadata_maps_to_openai_usage() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [],
            "usageMetadata": {
                "promptTokenCount": 10,
                "candidatesTokenCount": 20,
                "totalTokenCount": 30
            }
        }))
        .expect("parse");

        let usage = normalize_response(&response, "m").usage.expect("usage");
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 20);
        assert_eq!(usage.total_tokens, 30);
    }

    #[test]
    fn test_upstream_error_preserves_json_details() {
        let err = upstream_error(400, r#"{"error":{"code":400,"message":"bad"}}"#);
        assert_eq!(err.http_status_code(), 400);

        let body = err.client_body();
        assert_eq!(body["error"], "Gemini API 错误 (400)");
        assert_eq!(body["details"]["error"]["message"], "bad");
    }

    #[test]
    fn test_upstream_error_preserves_plain_text_details() {
        let err = upstream_error(503, "Service Unavailable");
        let body = err.client_body();
        assert_eq!(body["error"], "Gemini API 错误 (503)");
        assert_eq!(body["details"], "Service Unavailable");
    }
}
