//! Service error types and their HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors produced while validating or scoring a feature matrix.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Client-caused: malformed or missing input. Surfaced as HTTP 400.
    #[error("validation error: {0}")]
    Validation(String),

    /// Client-caused: rows with inconsistent lengths. Surfaced as HTTP 400.
    #[error("shape error: row {row} has {actual} features, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Numeric fault on pathological input. Surfaced as HTTP 500.
    #[error("computation error: {0}")]
    Computation(String),
}

impl ScoringError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScoringError::Validation(_) | ScoringError::Shape { .. } => StatusCode::BAD_REQUEST,
            ScoringError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScoringError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
