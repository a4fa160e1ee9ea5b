//! HTTP serving surface for the scoring model
//!
//! Exposes `POST /predict` and `GET /health` over axum. All request-scoped
//! state is transient; the shared state only carries the scorer, config and
//! metrics.

use crate::config::AppConfig;
use crate::error::ScoringError;
use crate::matrix::FeatureMatrix;
use crate::metrics::ServiceMetrics;
use crate::model::scorer::Scorer;
use crate::types::{PredictionRequest, PredictionResponse};
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

/// Shared application state
pub struct AppState {
    pub scorer: Scorer,
    pub metrics: Arc<ServiceMetrics>,
    pub model_version: String,
    pub started_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &AppConfig, metrics: Arc<ServiceMetrics>) -> Self {
        Self {
            scorer: Scorer::with_threshold(config.model.threshold),
            metrics,
            model_version: config.model.version.clone(),
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model_version: String,
    uptime_secs: i64,
}

/// Build the application router.
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// `POST /predict` - score a batch of feature vectors.
///
/// Accepts `{ "features": [[...], [...], ...] }` and returns
/// `{ "predictions": [...], "scores": [...], "model_version": "..." }`.
/// Every request is all-or-nothing: either a full valid response or an
/// error status.
async fn predict(
    State(state): State<SharedState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ScoringError> {
    let start_time = Instant::now();
    let request_id = uuid::Uuid::new_v4();

    let matrix = match FeatureMatrix::new(request.features) {
        Ok(matrix) => matrix,
        Err(e) => {
            state.metrics.record_rejection();
            warn!(request_id = %request_id, error = %e, "Rejected prediction request");
            return Err(e);
        }
    };

    let result = state.scorer.score(&matrix)?;
    let processing_time = start_time.elapsed();

    state
        .metrics
        .record_request(processing_time, &result.scores, &result.predictions);

    debug!(
        request_id = %request_id,
        rows = matrix.num_rows(),
        features = matrix.num_features(),
        processing_time_us = processing_time.as_micros(),
        "Prediction request served"
    );

    Ok(Json(PredictionResponse::new(
        result.predictions,
        result.scores,
        &state.model_version,
    )))
}

/// `GET /health` - liveness probe with model version and uptime.
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_version: state.model_version.clone(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// Serve the router until shutdown.
pub async fn serve(config: &AppConfig, state: SharedState) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    info!("Scoring service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl+c");
        return;
    }
    info!("Shutting down...");
}
