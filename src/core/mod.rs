pub mod heuristic;
pub mod orchestrator;
pub mod schedule;
pub mod view;

pub use crate::domain::model::{PredictionResult, PredictionSource, SentimentLabel};
pub use crate::domain::ports::{ConfigProvider, Predictor, RandomSource};
pub use crate::utils::error::Result;
