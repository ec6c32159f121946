//! Caller-facing chat request types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat request accepted on the dedicated gateway endpoints.
///
/// Callers speak a loose OpenAI-flavored dialect: every field is optional
/// and unknown fields are ignored. Defaulting is the translator's job, not
/// the parser's, so absent fields stay absent here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IncomingChatRequest {
    /// Target model identifier. The provider default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Single-turn prompt, consulted only when `messages` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Ordered conversation history. Takes precedence over `prompt`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Output token cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Provider-specific safety settings, forwarded verbatim when supplied.
    /// Kept as raw JSON so callers control the exact shape.
    #[serde(
        default,
        rename = "safetySettings",
        alias = "safety_settings",
        skip_serializing_if = "Option::is_none"
    )]
    pub safety_settings: Option<Value>,
}

/// One conversation turn.
///
/// `role` stays a free-form string: anything other than `assistant` folds to
/// the user role during translation, so unknown roles must parse fine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_parses_to_defaults() {
        let request: IncomingChatRequest = serde_json::from_str("{}").expect("parse");
        assert!(request.model.is_none());
        assert!(request.prompt.is_none());
        assert!(request.messages.is_empty());
        assert!(request.temperature.is_none());
        assert!(request.max_tokens.is_none());
        assert!(request.safety_settings.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = json!({
            "prompt": "hi",
            "stream": true,
            "top_p": 0.5,
            "user": "abc"
        });
        let request: IncomingChatRequest = serde_json::from_value(raw).expect("parse");
        assert_eq!(request.prompt.as_deref(), Some("hi"));
    }

    #[test]
    fn test_safety_settings_accepts_both_spellings() {
        let camel = json!({ "safetySettings": [{"category": "X", "threshold": "Y"}] });
        let snake = json!({ "safety_settings": [{"category": "X", "threshold": "Y"}] });

        let a: IncomingChatRequest = serde_json::from_value(camel).expect("camelCase");
        let b: IncomingChatRequest = serde_json::from_value(snake).expect("snake_case");
        assert_eq!(a.safety_settings, b.safety_settings);
        assert!(a.safety_settings.is_some());
    }

    #[test]
    fn test_full_conversation_parses() {
        let raw = json!({
            "model": "gemini-1.5-flash",
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "hello" },
                { "role": "assistant", "content": "hi" }
            ],
            "temperature": 0.2,
            "max_tokens": 64
        });
        let request: IncomingChatRequest = serde_json::from_value(raw).expect("parse");
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[2].role, "assistant");
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(64));
    }
}
