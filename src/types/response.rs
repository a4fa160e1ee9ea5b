//! Outgoing prediction response schema

use serde::{Deserialize, Serialize};

/// Outgoing JSON response for `POST /predict`.
///
/// `predictions`, `scores` and the request's `features` always have equal
/// length. `model_version` is a constant literal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Binary class label per input row (0 or 1).
    pub predictions: Vec<u8>,
    /// Positive-class probability per input row, rounded to 4 digits.
    pub scores: Vec<f64>,
    /// Version of the serving model.
    pub model_version: String,
}

impl PredictionResponse {
    pub fn new(predictions: Vec<u8>, scores: Vec<f64>, model_version: &str) -> Self {
        Self {
            predictions,
            scores,
            model_version: model_version.to_string(),
        }
    }
}
