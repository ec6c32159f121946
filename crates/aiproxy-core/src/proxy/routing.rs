//! Route resolution for the generic relay.
//!
//! `/gemini/<rest>` and `/chatgpt/<rest>` map onto the configured upstream
//! bases with the prefix stripped and the remainder plus query preserved
//! byte for byte. Everything else is a routing error that names the valid
//! prefixes.

use aiproxy_types::{GatewayError, Result};

use crate::config::GatewayConfig;

/// Upstream provider selected by the path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }
}

/// A resolved relay destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub provider: Provider,
    /// Absolute upstream URL: base + stripped path + original query.
    pub url: String,
}

/// Map an inbound path and query onto an upstream URL.
pub fn resolve_forward_target(
    config: &GatewayConfig,
    path: &str,
    query: Option<&str>,
) -> Result<UpstreamTarget> {
    let (provider, base, rest) = if let Some(rest) = path.strip_prefix("/gemini") {
        (Provider::Gemini, config.gemini_base_url.as_str(), rest)
    } else if let Some(rest) = path.strip_prefix("/chatgpt") {
        (Provider::OpenAi, config.openai_base_url.as_str(), rest)
    } else {
        return Err(GatewayError::RouteNotFound { path: path.to_string() });
    };

    let mut url = format!("{base}{rest}");
    if let Some(query) = query {
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
    }

    Ok(UpstreamTarget { provider, url })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GatewayConfig {
        GatewayConfig {
            gemini_base_url: "https://gemini.example.com".to_string(),
            openai_base_url: "https://openai.example.com".to_string(),
            ..GatewayConfig::default()
        }
    }

    #[test]
    fn test_gemini_prefix_is_stripped() {
        let target = resolve_forward_target(
            &config(),
            "/gemini/v1beta/models/gemini-pro:generateContent",
            None,
        )
        .expect("resolves");
        assert_eq!(target.provider, Provider::Gemini);
        assert_eq!(
            target.url,
            "https://gemini.example.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_chatgpt_prefix_is_stripped() {
        let target =
            resolve_forward_target(&config(), "/chatgpt/v1/chat/completions", None)
                .expect("resolves");
        assert_eq!(target.provider, Provider::OpenAi);
        assert_eq!(target.url, "https://openai.example.com/v1/chat/completions");
    }

    #[test]
    fn test_query_is_preserved_verbatim() {
        let target = resolve_forward_target(
            &config(),
            "/gemini/v1beta/models",
            Some("key=abc&pageSize=5"),
        )
        .expect("resolves");
        assert_eq!(
            target.url,
            "https://gemini.example.com/v1beta/models?key=abc&pageSize=5"
        );
    }

    #[test]
    fn test_bare_chatgpt_maps_to_base() {
        let target = resolve_forward_target(&config(), "/chatgpt", None).expect("resolves");
        assert_eq!(target.url, "https://openai.example.com");
    }

    #[test]
    fn test_trailing_slash_prefix_maps_to_base_root() {
        let target = resolve_forward_target(&config(), "/gemini/", None).expect("resolves");
        assert_eq!(target.provider, Provider::Gemini);
        assert_eq!(target.url, "https://gemini.example.com/");
    }

    #[test]
    fn test_empty_query_adds_no_separator() {
        let target = resolve_forward_target(&config(), "/chatgpt/v1/models", Some(""))
            .expect("resolves");
        assert_eq!(target.url, "https://openai.example.com/v1/models");
    }

    #[test]
    fn test_unknown_prefix_is_rejected() {
        let err = resolve_forward_target(&config(), "/v1/other", None).expect_err("rejects");
        assert_eq!(err, GatewayError::RouteNotFound { path: "/v1/other".to_string() });
        assert_eq!(err.http_status_code(), 400);
    }
}
