//! HTTP client for the `/predict` service.

use crate::domain::model::{PredictionResult, PredictionSource};
use crate::domain::ports::{ConfigProvider, Predictor};
use crate::utils::error::{PredictorError, Result};
use crate::utils::numeric::{display_text, is_truthy, number_or};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_RATING: f64 = 3.0;
pub const DEFAULT_CONFIDENCE: f64 = 75.0;
pub const DEFAULT_SENTIMENT: &str = "Neutral";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Body of the service's `GET /` health check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

#[derive(Debug, Clone)]
pub struct RemotePredictor {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemotePredictor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Root of the service the predict endpoint lives on.
    pub fn health_url(&self) -> Result<Url> {
        let endpoint = Url::parse(&self.endpoint).map_err(|e| {
            PredictorError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: self.endpoint.clone(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;
        endpoint
            .join("/")
            .map_err(|e| PredictorError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: self.endpoint.clone(),
                reason: format!("Cannot derive service root: {}", e),
            })
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.health_url()?;
        tracing::debug!("Checking prediction service health at: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(PredictorError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let status: HealthStatus = response.json().await.map_err(|e| self.classify(e))?;
        Ok(status)
    }

    fn classify(&self, error: reqwest::Error) -> PredictorError {
        if error.is_timeout() {
            PredictorError::Timeout {
                after: self.timeout,
            }
        } else {
            PredictorError::ApiError(error)
        }
    }
}

#[async_trait]
impl Predictor for RemotePredictor {
    async fn predict(&self, text: &str) -> Result<PredictionResult> {
        tracing::debug!("Making prediction request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        tracing::debug!("Prediction response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PredictorError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| self.classify(e))?;
        normalize(&body)
    }
}

/// Applies the response defaults: rating 3, confidence 75, sentiment "Neutral".
///
/// Numbers are coerced but neither rounded nor clamped. A `null` body is
/// rejected; any other non-object body yields the defaults.
pub fn normalize(body: &Value) -> Result<PredictionResult> {
    if body.is_null() {
        return Err(PredictorError::MalformedResponse {
            message: "response body is null".to_string(),
        });
    }

    if let Some(reported) = body.get("error").filter(|e| is_truthy(e)) {
        tracing::warn!("Prediction service reported: {}", display_text(reported));
    }

    let sentiment = match body.get("sentiment") {
        Some(value) if is_truthy(value) => display_text(value),
        _ => DEFAULT_SENTIMENT.to_string(),
    };

    Ok(PredictionResult {
        rating: number_or(body.get("rating"), DEFAULT_RATING),
        confidence: number_or(body.get("confidence"), DEFAULT_CONFIDENCE),
        sentiment,
        source: PredictionSource::Remote,
    })
}
