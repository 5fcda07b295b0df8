//! # Health Endpoint
//!
//! Serves `GET /health` over HTTP with `axum`, backed by the `HealthReporter`.

use anyhow::{Context, Result};
use axum::{Json, Router, extract::State, routing::get};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::application::health::{HealthReport, HealthReporter};

pub fn health_router(reporter: Arc<HealthReporter>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(reporter)
}

async fn health_handler(State(reporter): State<Arc<HealthReporter>>) -> Json<HealthReport> {
    Json(reporter.report())
}

/// Binds before the bot connects so a taken port fails startup.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health endpoint on {addr}"))
}

/// Serves until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    reporter: Arc<HealthReporter>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, health_router(reporter))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Health endpoint failed")
}
