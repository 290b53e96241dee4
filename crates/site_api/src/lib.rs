//! Stateless proxy routes backing the portfolio desktop.
//!
//! Each route forwards one request to one upstream service and relays the answer, translating any
//! failure into the uniform error envelope defined in [`portfolio_contract`]. Nothing is shared
//! between requests except the pooled HTTP client.

pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::{ApiConfig, UpstreamConfig};

#[derive(Clone)]
/// Router state: the upstream endpoints and a pooled HTTP client.
pub struct ApiState {
    /// Shared HTTP client. Built without a request timeout.
    pub client: reqwest::Client,
    /// Upstream endpoints.
    pub upstream: Arc<UpstreamConfig>,
}

impl ApiState {
    /// Creates router state for the given upstream endpoints.
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: Arc::new(upstream),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Builds the `/api/*` router.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Adds a static file fallback so the built site can be served from the same origin.
pub fn with_static_site(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir))
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: ApiConfig) -> anyhow::Result<()> {
    let mut router = build_router(ApiState::new(config.upstream.clone()));
    if let Some(dir) = config.static_dir.as_deref() {
        info!(dir = %dir.display(), "serving static site files");
        router = with_static_site(router, dir);
    }

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "site_api listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("site_api server stopped")?;
    Ok(())
}
