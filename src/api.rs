//! HTTP API for the export metrics calculators.
//!
//! This module exposes the calculators as a small JSON API using the
//! [`axum`](https://crates.io/crates/axum) framework.  Each calculator
//! form posts its fields and receives the raw result together with the
//! formatted figures and badge colour it should render.  A batch
//! endpoint evaluates many scenarios at once through the engine.

use crate::calculator::{
    compute_break_even, compute_export_margin, compute_profitability, compute_roi,
};
use crate::config::Config;
use crate::display::Summary;
use crate::engine::{run_batch, BatchInput};
use crate::error::MetricsError;
use crate::models::{BreakEvenInput, ExportMarginInput, ProfitabilityInput, RoiInput};
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Application state shared across requests.
pub struct AppState {
    pub max_batch: usize,
}

/// Response body of the single-calculator endpoints.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    pub result: T,
    pub display: Vec<(&'static str, String)>,
    pub color: &'static str,
}

impl<T: Summary> Report<T> {
    pub fn new(result: T) -> Self {
        let display = result.display_fields();
        let color = result.status().color();
        Report { result, display, color }
    }
}

/// Build the API router for the given configuration.
pub fn build_router(config: &Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { max_batch: config.max_batch });
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/api/roi", post(roi_handler))
        .route("/api/profitability", post(profitability_handler))
        .route("/api/break-even", post(break_even_handler))
        .route("/api/export-margin", post(export_margin_handler))
        .route("/api/batch", post(batch_handler))
        .with_state(state.clone());
    (router, state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn roi_handler(Json(input): Json<RoiInput>) -> impl IntoResponse {
    debug!(?input, "roi");
    Json(Report::new(compute_roi(&input)))
}

async fn profitability_handler(Json(input): Json<ProfitabilityInput>) -> impl IntoResponse {
    debug!(?input, "profitability");
    Json(Report::new(compute_profitability(&input)))
}

async fn break_even_handler(Json(input): Json<BreakEvenInput>) -> impl IntoResponse {
    debug!(?input, "break-even");
    Json(Report::new(compute_break_even(&input)))
}

async fn export_margin_handler(Json(input): Json<ExportMarginInput>) -> impl IntoResponse {
    debug!(?input, "export margin");
    Json(Report::new(compute_export_margin(&input)))
}

/// Handler for POST /api/batch
async fn batch_handler(
    State(app_state): State<Arc<AppState>>,
    Json(input): Json<BatchInput>,
) -> impl IntoResponse {
    match run_batch(input, app_state.max_batch) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            let status = match err {
                MetricsError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                MetricsError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let body = Json(serde_json::json!({"error": err.to_string()}));
            (status, body).into_response()
        }
    }
}

/// Launch the API server.  Binds to the configured address and blocks
/// until the server terminates.
pub async fn serve(config: &Config) -> Result<()> {
    let (router, _state) = build_router(config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, max_batch = config.max_batch, "server listening");
    axum::serve(listener, router).await.context("server error")
}
