pub mod handlers;

use crate::{analysis::Analyzer, config::Config, llm::GeminiClient, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

/// Routes for the form page and the upload endpoint. Bodies over `max_upload_bytes` get 413.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Instruction context is built once and shared by every request
    let instruction = config.gemini.instruction_context();
    let client = GeminiClient::new(&config.gemini, instruction);
    info!("Using model {}", client.model());

    let app_state = AppState {
        analyzer: Arc::new(Analyzer::new(Arc::new(client))),
    };

    let app = router(app_state, config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
