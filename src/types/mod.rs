//! Type definitions for the scoring API

pub mod request;
pub mod response;

pub use request::PredictionRequest;
pub use response::PredictionResponse;
