//! ML Scoring Service - Main Entry Point
//!
//! Serves a /predict HTTP endpoint that scores batches of feature vectors
//! with a placeholder model and returns predictions plus probabilities.

use anyhow::Result;
use ml_scoring_service::{
    config::AppConfig,
    metrics::{MetricsReporter, ServiceMetrics},
    server::{self, AppState},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ml_scoring_service=info".into()),
        )
        .init();

    info!("Starting ML Scoring Service");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        model_version = %config.model.version,
        threshold = config.model.threshold,
        "Configuration loaded"
    );

    // Initialize metrics and shared state
    let metrics = Arc::new(ServiceMetrics::new());
    let state = Arc::new(AppState::new(&config, metrics.clone()));

    // Start metrics reporter (prints summary every 30 seconds)
    tokio::spawn(async move {
        let reporter = MetricsReporter::new(metrics, 30);
        reporter.start().await;
    });

    server::serve(&config, state).await?;

    info!("Scoring service shut down");
    Ok(())
}
