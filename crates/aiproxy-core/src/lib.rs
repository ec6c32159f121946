//! # aiproxy Core
//!
//! Gateway logic for aiproxy: a credentialed HTTP relay in front of the
//! Gemini and OpenAI upstreams, plus a translating chat endpoint that lets
//! OpenAI-dialect callers talk to Gemini.
//!
//! The [`proxy`] module holds the router, middleware, mappers and upstream
//! client; [`config`] holds the immutable runtime configuration loaded once
//! at startup.

pub mod config;
pub mod proxy;

pub use config::GatewayConfig;
