//! # aiproxy Types
//!
//! Shared wire types and error definitions for the aiproxy gateway.
//!
//! This crate sits at the bottom of the dependency graph:
//!
//! ```text
//! aiproxy-server ──> aiproxy-core ──> aiproxy-types
//! ```
//!
//! It holds the caller-facing chat dialect, the Gemini and OpenAI wire
//! schemas, and the gateway error taxonomy. Nothing in here performs I/O.

pub mod error;
pub mod protocol;

pub use error::{GatewayError, Result};
pub use protocol::chat::{ChatMessage, IncomingChatRequest};
pub use protocol::gemini::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiUsageMetadata, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};
pub use protocol::openai::{ChatCompletion, Choice, ChoiceMessage, Usage};
