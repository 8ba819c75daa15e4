use crate::domain::model::PredictionResult;
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Anything able to produce a rating for validated feedback.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, text: &str) -> Result<PredictionResult>;
}

/// Source of uniform draws in `[0, 1)` for the heuristic.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays fixed draws in order, then keeps returning the last one.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = match self.draws.get(self.next) {
            Some(v) => *v,
            None => self.draws.last().copied().unwrap_or(0.5),
        };
        self.next += 1;
        value
    }
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}
