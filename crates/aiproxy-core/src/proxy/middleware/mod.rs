//! Request middleware for the gateway.
//!
//! - [`auth`]: credential checks, one per endpoint family
//! - [`cors`]: CORS policies for browser callers

pub mod auth;
pub mod cors;

pub use auth::{access_token_auth, proxy_key_auth};
pub use cors::{chat_cors_layer, forward_cors_layer};
