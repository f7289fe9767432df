// Application state and router

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use looker_export_backend_client::{ClientError, ExportBackendClient};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::handlers;

pub type SharedState = Arc<AppState>;

/// State shared by all requests; never mutated after startup
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: ExportBackendClient,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ClientError> {
        let backend =
            ExportBackendClient::with_timeout(&config.backend_url, config.upstream_timeout())?;
        Ok(Self { backend })
    }
}

/// Build the full application router
pub fn build_router(state: SharedState, config: &ServerConfig) -> Router {
    // Allow the front-end dev server on another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/fetch_and_send", post(handlers::fetch_and_send))
        .with_state(state);

    let app = match &config.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.fallback(handlers::not_found),
    };

    // Replaces axum's 2MB default; an oversized body is rejected by the
    // extractor and answered as JSON by the handler
    app.layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
