mod analysis;
mod config;
mod density;
mod error;
mod insert;
mod keywords;
mod model;
mod readability;
mod server;
mod tips;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seo_common::oracle::{ExtractionOracle, UnconfiguredOracle};
use seo_common::textrazor::{TextRazorClient, TextRazorConfig};

use analysis::Analyzer;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting seo-analyzer API server");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(
        bind = %config.bind_addr(),
        environment = %config.environment,
        allowed_origins = config.allowed_origins.len(),
        "configuration loaded"
    );

    // 2. Extraction oracle (optional; without a key every report uses fallback keywords)
    let textrazor_config = TextRazorConfig::from_env();
    let oracle: Arc<dyn ExtractionOracle> = if textrazor_config.api_key.is_some() {
        info!(
            base_url = %textrazor_config.base_url,
            timeout_ms = textrazor_config.timeout.as_millis(),
            "textrazor client configured"
        );
        Arc::new(TextRazorClient::new(textrazor_config)?)
    } else {
        warn!("TEXTRAZOR_API_KEY not set, all analyses will use fallback keywords");
        Arc::new(UnconfiguredOracle)
    };

    // 3. Serve
    let app = server::router(Arc::new(Analyzer::new(oracle)), &config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(error::AppError::from)?;

    info!(addr = %config.bind_addr(), "HTTP server ready");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .inspect_err(|e| tracing::error!(error = %e, "HTTP server error"))?;

    info!("HTTP server shut down");
    Ok(())
}
