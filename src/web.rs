use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::{CorsConfig, WorldInfoConfig};
use crate::lookup::WorldInfoService;

/// Assemble the router with its HTTP layers
pub fn app(service: WorldInfoService, cors_config: &CorsConfig) -> Router {
    let mut app = api::router(service).layer(TraceLayer::new_for_http());

    if cors_config.allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

pub async fn run(config: &WorldInfoConfig, service: WorldInfoService) -> Result<()> {
    let app = app(service, &config.cors);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Web server terminated unexpectedly")?;
    Ok(())
}
