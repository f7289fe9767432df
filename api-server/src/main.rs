use anyhow::Context;
use looker_export_api_server::{build_router, telemetry, AppState, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = telemetry::init_tracing(config.log_dir.as_deref());

    let state = Arc::new(AppState::new(&config).context("Failed to create backend client")?);
    tracing::info!("Relaying exports to {}", state.backend.endpoint());
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving front-end from {}", dir.display());
    }

    let app = build_router(state, &config);

    let addr = config.socket_addr()?;
    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
