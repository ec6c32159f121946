//! Outbound HTTP to the upstream providers.

pub mod client;

pub use client::UpstreamClient;
