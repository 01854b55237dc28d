//! Complyx Web Server
//!
//! Run with: cargo run -p complyx-web

use anyhow::Context;
use complyx_analysis::AnalysisEngine;
use complyx_llm::backend::{AnthropicBackend, OpenAiBackend, OpenAiCompatibleBackend};
use complyx_llm::LlmBackend;
use complyx_web::config::{Config, LlmConfig};
use secrecy::ExposeSecret;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let backend = build_backend(&config.llm)?;
    info!(provider = backend.provider(), model = backend.model_id(), "LLM backend configured");

    let engine = AnalysisEngine::new(backend);
    let state = complyx_web::state::AppState::new(engine);
    let app = complyx_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_backend(cfg: &LlmConfig) -> anyhow::Result<Arc<dyn LlmBackend>> {
    match cfg.provider.as_str() {
        "openai" => {
            let key = cfg.api_key().with_context(|| {
                format!("API key env var {} is not set", cfg.api_key_env)
            })?;
            Ok(Arc::new(OpenAiBackend::new(key.expose_secret(), &cfg.model)))
        }
        "anthropic" => {
            let key = cfg.api_key().with_context(|| {
                format!("API key env var {} is not set", cfg.api_key_env)
            })?;
            Ok(Arc::new(AnthropicBackend::new(key.expose_secret(), &cfg.model)))
        }
        "openai_compatible" => {
            let base_url = cfg
                .base_url
                .clone()
                .context("base_url is required for provider = \"openai_compatible\"")?;
            let key = cfg.api_key().map(|k| k.expose_secret().to_string());
            Ok(Arc::new(OpenAiCompatibleBackend::new(base_url, &cfg.model, key)))
        }
        other => anyhow::bail!("unknown llm provider: {other}"),
    }
}
