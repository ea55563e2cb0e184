use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use wildrose::config::AppConfig;
use wildrose::services::intake::log::LogSink;
use wildrose::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.quote_forward {
        tracing::info!("quote forwarding enabled, page will post submissions to /api/quote");
    }
    tracing::info!("serving static assets from {}", config.assets_dir);

    let state = Arc::new(AppState {
        config: config.clone(),
        quotes: Box::new(LogSink),
    });

    let app = wildrose::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
