//! Model scoring components

pub mod scorer;

pub use scorer::{ScoreResult, Scorer};
