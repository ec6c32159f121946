//! Wire schemas spoken on either side of the gateway.
//!
//! - [`chat`]: the loose OpenAI-flavored dialect accepted from callers
//! - [`gemini`]: Google's generateContent request/response schema
//! - [`openai`]: the chat.completion schema returned to callers

pub mod chat;
pub mod gemini;
pub mod openai;
