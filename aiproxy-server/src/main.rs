//! aiproxy Server - Headless Gateway Daemon
//!
//! A small HTTP gateway in front of the Gemini and OpenAI upstreams:
//! - Validates caller credentials before any body work
//! - Translates OpenAI-dialect chat requests into Gemini's schema
//! - Relays `/gemini/*` and `/chatgpt/*` traffic transparently

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use aiproxy_core::proxy::{GatewayServer, ServerStartConfig};
use aiproxy_core::GatewayConfig;

const DEFAULT_PORT: u16 = 8745;

#[derive(Parser, Debug)]
#[command(
    name = "aiproxy-server",
    about = "Credentialed HTTP gateway for the Gemini and OpenAI upstreams"
)]
struct ServerArgs {
    /// Address to bind.
    #[arg(long, env = "AIPROXY_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "AIPROXY_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = ServerArgs::parse();
    let config = GatewayConfig::from_env();

    if config.access_token.is_empty() {
        warn!("AIPROXY_ACCESS_TOKEN is not set; /gemini and /openai will reject every call");
    }
    if config.proxy_key.is_empty() {
        warn!("AIPROXY_PROXY_KEY is not set; the /gemini/* and /chatgpt/* relay will reject every call");
    }

    info!("🚀 aiproxy server starting on {}:{}...", args.host, args.port);
    info!("🔀 Chat endpoints: POST /gemini (translating), POST /openai (passthrough)");
    info!("🔁 Relay prefixes: /gemini/* -> {}, /chatgpt/* -> {}", config.gemini_base_url, config.openai_base_url);

    GatewayServer::new(ServerStartConfig { host: args.host, port: args.port, config })
        .run()
        .await
        .map_err(|error| anyhow::anyhow!("server error: {error}"))
}
