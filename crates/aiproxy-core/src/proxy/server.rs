//! Router assembly and the gateway server.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::proxy::handlers;
use crate::proxy::middleware;
use crate::proxy::upstream::UpstreamClient;

/// Shared application state: the immutable config plus one pooled upstream
/// client, both behind `Arc` so cloning per request stays cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub upstream: Arc<UpstreamClient>,
}

/// Assemble the full gateway router.
///
/// Three route families, each with its own credential and CORS policy:
///
/// - `/gemini`, `/openai`: dedicated chat endpoints behind the access token
/// - `/gemini/*`, `/chatgpt*`: generic relay behind the proxy key
/// - `/health`, `/healthz`: open liveness probes
///
/// Unmatched paths fall through to the relay's fallback, which still runs
/// the proxy-key check before reporting the routing error. The fallback
/// shares the relay's CORS policy, so its verdicts reach browser callers.
pub fn build_gateway_router(config: Arc<GatewayConfig>) -> Router {
    let state = AppState {
        upstream: Arc::new(UpstreamClient::new(&config)),
        config: config.clone(),
    };

    let chat_routes = Router::new()
        .route(
            "/gemini",
            post(handlers::gemini::handle_gemini_chat).options(preflight),
        )
        .route(
            "/openai",
            post(handlers::openai::handle_openai_chat).options(preflight),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            config.clone(),
            middleware::auth::access_token_auth,
        ))
        .layer(middleware::cors::chat_cors_layer());

    // A trailing-slash prefix leaves "*path" nothing to match, so the bare
    // slash forms get routes of their own.
    let forward_routes = Router::new()
        .route("/gemini/", any(handlers::forward::handle_forward))
        .route("/gemini/*path", any(handlers::forward::handle_forward))
        .route("/chatgpt", any(handlers::forward::handle_forward))
        .route("/chatgpt/", any(handlers::forward::handle_forward))
        .route("/chatgpt/*path", any(handlers::forward::handle_forward))
        .route_layer(axum::middleware::from_fn_with_state(
            config,
            middleware::auth::proxy_key_auth,
        ))
        .layer(middleware::cors::forward_cors_layer());

    let fallback_routes = Router::new()
        .fallback(handlers::forward::handle_unknown_route)
        .layer(middleware::cors::forward_cors_layer());

    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .merge(chat_routes)
        .merge(forward_routes)
        .merge(fallback_routes)
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Plain OPTIONS on the chat endpoints, outside CORS preflight handling.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Parameters for starting the gateway server.
pub struct ServerStartConfig {
    pub host: String,
    pub port: u16,
    pub config: GatewayConfig,
}

/// The gateway server: binds, then serves the assembled router until the
/// process ends.
pub struct GatewayServer {
    start: ServerStartConfig,
}

impl GatewayServer {
    pub fn new(start: ServerStartConfig) -> Self {
        Self { start }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = format!("{}:{}", self.start.host, self.start.port);
        let app = build_gateway_router(Arc::new(self.start.config));

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Gateway listening on {}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
