//! Google Gemini `generateContent` wire types.
//!
//! Request types are fully constructed by the translator; response types are
//! deliberately tolerant, because safety-blocked candidates arrive without
//! content and error payloads carry none of these fields at all.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GenerationConfig,
    /// Either the caller-supplied settings verbatim or the gateway defaults.
    /// Raw JSON because callers own the shape when they provide one.
    pub safety_settings: Value,
}

/// One conversation turn in Gemini's schema. Role is `user` or `model`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Text part. The gateway produces and reads text parts only; a non-text
/// part deserializes with an empty `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Generation parameters forwarded to Gemini.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

/// One generated completion option.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<GeminiContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by Gemini.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: "hi".to_string() }],
            }],
            generation_config: GenerationConfig { temperature: 0.9, max_output_tokens: 2048 },
            safety_settings: json!([]),
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert!(value.get("generationConfig").is_some());
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
        assert!(value.get("safetySettings").is_some());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_blocked_candidate_without_content_parses() {
        let raw = json!({
            "candidates": [
                { "finishReason": "SAFETY", "index": 0, "safetyRatings": [] }
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).expect("parse");
        assert_eq!(response.candidates.len(), 1);
        assert!(response.candidates[0].content.is_none());
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn test_non_text_part_defaults_to_empty_text() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "functionCall": { "name": "f", "args": {} } }]
                }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).expect("parse");
        let content = response.candidates[0].content.as_ref().expect("content");
        assert_eq!(content.parts[0].text, "");
    }

    #[test]
    fn test_usage_metadata_parses_camel_case() {
        let raw = json!({
            "candidates": [],
            "usageMetadata": {
                "promptTokenCount": 7,
                "candidatesTokenCount": 12,
                "totalTokenCount": 19
            }
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).expect("parse");
        let usage = response.usage_metadata.expect("usage");
        assert_eq!(usage.prompt_token_count, 7);
        assert_eq!(usage.candidates_token_count, 12);
        assert_eq!(usage.total_token_count, 19);
    }
}
