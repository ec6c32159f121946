//! OpenAI-dialect ⇄ Gemini translation.
//!
//! [`request`] turns an [`aiproxy_types::IncomingChatRequest`] into Gemini's
//! `generateContent` schema; [`response`] turns Gemini's answer back into a
//! `chat.completion`. Both directions of the dedicated `/gemini` endpoint
//! flow through here and nowhere else.

pub mod request;
pub mod response;

pub use request::{default_safety_settings, resolve_model, translate_chat_request};
pub use response::{normalize_response, upstream_error};
