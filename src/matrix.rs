//! Validated feature matrix for batch scoring
//!
//! The request payload is a 2D list of numbers. Validation happens here,
//! before the scorer runs, so the scorer itself only ever sees well-formed
//! rectangular input.

use crate::error::ScoringError;

/// A validated, rectangular 2D feature matrix (rows = samples, columns =
/// features). Constructed per request and discarded after the response is
/// serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Validate raw nested vectors into a feature matrix.
    ///
    /// Rejects empty input, empty rows, non-finite values, and jagged
    /// (non-rectangular) input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ScoringError> {
        if rows.is_empty() {
            return Err(ScoringError::Validation(
                "features must be a non-empty array".to_string(),
            ));
        }

        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(ScoringError::Validation(format!(
                    "row {} must not be empty",
                    i
                )));
            }
            if row.len() != width {
                return Err(ScoringError::Shape {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ScoringError::Validation(format!(
                        "non-finite value at row {}, column {}",
                        i, j
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Number of samples (rows).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of features per sample.
    pub fn num_features(&self) -> usize {
        self.rows[0].len()
    }

    /// Iterate over sample rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}
