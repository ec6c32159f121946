//! Error definitions for the gateway.

mod gateway;

pub use gateway::GatewayError;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GatewayError>;
