mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, ScanRequest, ScanResponse};

use crate::{
    Result,
    backend::GeminiClient,
    cache::ResultCache,
    config::Config,
    recognition::RecognitionService,
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the router for a given service; shared with integration tests.
pub fn router(service: Arc<RecognitionService>) -> Router {
    let state = AppState { service };

    // Responses must carry a literal `Access-Control-Allow-Origin: *`.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(handlers::latest).post(handlers::scan))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::new();
    let backend = Arc::new(GeminiClient::new(http.clone(), config.backend.clone()));
    let cache = ResultCache::new(Duration::from_secs(config.recognition.cache_ttl_secs));
    let service = Arc::new(RecognitionService::new(
        backend,
        http,
        cache,
        config.recognition.instruction.clone(),
    ));

    let app = router(service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
