use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Please enter some feedback text!")]
    EmptyFeedback,

    #[error("Feedback is too short. Please enter at least {min} characters.")]
    FeedbackTooShort { length: usize, min: usize },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Prediction API returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Prediction API did not answer within {after:?}")]
    Timeout { after: Duration },

    #[error("Malformed prediction response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PredictorError {
    /// Rejected input; the predict cycle stops before any request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PredictorError::EmptyFeedback | PredictorError::FeedbackTooShort { .. }
        )
    }

    /// Failures of the remote path. These are recovered by the local heuristic.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PredictorError::ApiError(_)
                | PredictorError::UnexpectedStatus { .. }
                | PredictorError::Timeout { .. }
                | PredictorError::MalformedResponse { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PredictorError::EmptyFeedback | PredictorError::FeedbackTooShort { .. } => {
                self.to_string()
            }
            e if e.is_transport() => "Backend unavailable — showing demo result.".to_string(),
            PredictorError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
