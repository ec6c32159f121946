//! Gateway runtime configuration.
//!
//! Loaded once from the environment at startup and shared immutably for the
//! lifetime of the process. Nothing reads environment variables after this
//! point, so concurrent requests always observe the same values.

use url::Url;

/// Default Gemini upstream base.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default OpenAI upstream base.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Immutable gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Secret matched against the `access_token` query parameter on the
    /// dedicated chat endpoints. Empty means those endpoints deny everything.
    pub access_token: String,
    /// Secret matched against the `x-proxy-key` header on the generic relay.
    /// Empty means the relay denies everything.
    pub proxy_key: String,
    /// Gemini upstream base URL, without a trailing slash.
    pub gemini_base_url: String,
    /// OpenAI upstream base URL, without a trailing slash.
    pub openai_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            proxy_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the environment.
    ///
    /// Missing secrets stay empty, which fails closed at the auth layer
    /// rather than here.
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var("AIPROXY_ACCESS_TOKEN").unwrap_or_default(),
            proxy_key: std::env::var("AIPROXY_PROXY_KEY").unwrap_or_default(),
            gemini_base_url: resolve_base_url(
                "AIPROXY_GEMINI_BASE_URL",
                DEFAULT_GEMINI_BASE_URL,
            ),
            openai_base_url: resolve_base_url(
                "AIPROXY_OPENAI_BASE_URL",
                DEFAULT_OPENAI_BASE_URL,
            ),
        }
    }
}

/// Resolve an upstream base from an environment override.
///
/// Falls back to the default when the variable is unset, empty, or not a
/// parseable URL. A trailing slash is stripped so later joins stay clean.
fn resolve_base_url(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(raw) => {
            let url = raw.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                tracing::warn!("{} is set but empty, using default upstream", var);
                return default.to_string();
            }
            if Url::parse(&url).is_err() {
                tracing::warn!("{} is not a valid URL ({}), using default upstream", var, url);
                return default.to_string();
            }
            url
        }
        Err(_) => default.to_string(),
    }
}
