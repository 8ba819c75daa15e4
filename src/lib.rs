pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::RemotePredictor;
pub use crate::config::Settings;
pub use crate::core::orchestrator::{Completion, Orchestrator, PresentationState};
pub use crate::domain::model::PredictionResult;
pub use crate::utils::error::{PredictorError, Result};
