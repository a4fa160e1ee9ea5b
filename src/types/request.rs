//! Incoming prediction request schema

use serde::{Deserialize, Serialize};

/// Incoming JSON payload for `POST /predict`.
///
/// `features` is a 2D list of numeric feature vectors for single or batch
/// prediction, e.g. `[[0.3, 1.2, 5.1, 0.0], [0.9, 0.4, 3.3, 1.0]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub features: Vec<Vec<f64>>,
}
