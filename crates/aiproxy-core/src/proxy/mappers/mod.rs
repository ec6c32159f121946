//! Wire-format mappers.
//!
//! One mapper family per translating upstream. The OpenAI upstream needs
//! none: its traffic passes through byte-identical in both directions.

pub mod gemini;
