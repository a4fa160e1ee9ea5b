//! Placeholder scoring model
//!
//! Not a trained model: the probability of the positive class is the
//! logistic sigmoid of the row sum, thresholded at 0.5 into a binary label.
//! It stands in for a real model artifact so the serving surface can be
//! exercised end to end.

use crate::error::ScoringError;
use crate::matrix::FeatureMatrix;

/// Version string reported in every prediction response. A constant
/// literal, not derived from any model artifact.
pub const MODEL_VERSION: &str = "v1.0.0";

/// Default decision boundary separating predicted classes.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Row sums are clamped to this magnitude before exponentiation so `exp`
/// cannot overflow on pathological input.
const SIGMOID_CLAMP: f64 = 500.0;

/// Number of decimal digits kept when rounding scores for presentation.
const SCORE_DIGITS: u32 = 4;

/// Per-row scoring output: one probability in [0, 1] and one label in
/// {0, 1} for each input row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Positive-class probabilities, rounded to 4 decimal digits.
    pub scores: Vec<f64>,
    /// Binary class labels, thresholded from the unrounded probabilities.
    pub predictions: Vec<u8>,
}

/// Pure, stateless scorer mapping a feature matrix to per-row class
/// probabilities and labels.
#[derive(Debug, Clone)]
pub struct Scorer {
    threshold: f64,
}

impl Scorer {
    /// Create a scorer with the default 0.5 decision threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Create a scorer with a custom decision threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Get the configured decision threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score every row of a validated feature matrix.
    ///
    /// Per row: probability = sigmoid(row sum), label = 1 when the
    /// unrounded probability meets the threshold (`>=`), 0 otherwise.
    pub fn score(&self, matrix: &FeatureMatrix) -> Result<ScoreResult, ScoringError> {
        let mut scores = Vec::with_capacity(matrix.num_rows());
        let mut predictions = Vec::with_capacity(matrix.num_rows());

        for (i, row) in matrix.rows().enumerate() {
            let row_sum: f64 = row.iter().sum();
            let prob = sigmoid(row_sum);

            if !prob.is_finite() {
                return Err(ScoringError::Computation(format!(
                    "non-finite probability for row {}",
                    i
                )));
            }

            predictions.push(u8::from(prob >= self.threshold));
            scores.push(round_score(prob));
        }

        Ok(ScoreResult {
            scores,
            predictions,
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Logistic sigmoid with the input clamped to avoid `exp` overflow.
fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
    1.0 / (1.0 + (-x).exp())
}

/// Round a probability to 4 decimal digits for presentation.
fn round_score(p: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DIGITS as i32);
    (p * factor).round() / factor
}
