//! ML Scoring Service Library
//!
//! A small model-serving HTTP endpoint: accepts batches of numeric feature
//! vectors, scores each row with a placeholder model (sigmoid of the row
//! sum), and returns binary predictions plus probabilities as JSON.

pub mod config;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod model;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::ScoringError;
pub use matrix::FeatureMatrix;
pub use metrics::ServiceMetrics;
pub use model::scorer::Scorer;
pub use types::{request::PredictionRequest, response::PredictionResponse};
