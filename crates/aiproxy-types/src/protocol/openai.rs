//! OpenAI `chat.completion` wire types.
//!
//! Only the response side is modeled. Requests bound for the OpenAI upstream
//! are relayed verbatim as bytes; these types exist so translated Gemini
//! responses come back to callers in the unified schema.

use serde::{Deserialize, Serialize};

/// Chat completion response in OpenAI's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// Response identifier. Translated responses use `gemini-<epoch millis>`.
    pub id: String,
    /// Always `chat.completion`.
    pub object: String,
    /// Unix timestamp in seconds.
    pub created: i64,
    /// The model that produced the completion.
    pub model: String,
    /// One choice per upstream candidate, in order.
    pub choices: Vec<Choice>,
    /// Token usage, present when the upstream reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// A single completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: ChoiceMessage,
    /// `stop`, `length`, or `content_filter`.
    pub finish_reason: Option<String>,
}

/// Message payload of a choice. Role is always `assistant`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceMessage {
    pub role: String,
    pub content: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
