//! Chat request → Gemini `generateContent` translation.

use serde_json::{json, Value};

use aiproxy_types::protocol::chat::IncomingChatRequest;
use aiproxy_types::protocol::gemini::{
    GeminiContent, GeminiPart, GenerateContentRequest, GenerationConfig,
};

/// Model used when the caller names none.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";
/// Sampling temperature used when the caller names none.
pub const DEFAULT_TEMPERATURE: f64 = 0.9;
/// Output token cap used when the caller names none.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Resolve the target model. An empty model string counts as absent so the
/// upstream URL never ends up with a hole in its path.
pub fn resolve_model(request: &IncomingChatRequest) -> String {
    request
        .model
        .clone()
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Translate a chat request into Gemini's native schema.
///
/// Role mapping is deliberately coarse: `assistant` becomes `model` and
/// every other role, `system` included, becomes `user`. When `messages` is
/// empty the single-turn `prompt` is used instead; when both are absent the
/// result still carries one empty-text turn, and the upstream stays the
/// validation authority for that case.
pub fn translate_chat_request(request: &IncomingChatRequest) -> GenerateContentRequest {
    let contents = if request.messages.is_empty() {
        vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart { text: request.prompt.clone().unwrap_or_default() }],
        }]
    } else {
        request
            .messages
            .iter()
            .map(|message| GeminiContent {
                role: Some(map_role(&message.role).to_string()),
                parts: vec![GeminiPart { text: message.content.clone() }],
            })
            .collect()
    };

    GenerateContentRequest {
        contents,
        generation_config: GenerationConfig {
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_output_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
        },
        safety_settings: request
            .safety_settings
            .clone()
            .unwrap_or_else(default_safety_settings),
    }
}

/// Gemini knows two roles; everything that is not the assistant is the user.
fn map_role(role: &str) -> &'static str {
    if role == "assistant" {
        "model"
    } else {
        "user"
    }
}

/// Safety overrides injected when the caller supplies none.
///
/// The upstream filters conservatively when no settings are sent; callers
/// of this gateway expect the permissive set. A caller-supplied value wins
/// verbatim, there is no merging with these defaults.
pub fn default_safety_settings() -> Value {
    json!([
        { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" }
    ])
}
