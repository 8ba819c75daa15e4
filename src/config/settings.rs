use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 50;

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout: Duration,
    pub animate: bool,
    pub frame_interval: Duration,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            animate: true,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        let display = config.display();

        Self {
            endpoint: config.remote.endpoint.clone(),
            timeout: config
                .remote
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            animate: display.animate.unwrap_or(defaults.animate),
            frame_interval: display
                .frame_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_interval),
            color: display.color.unwrap_or(defaults.color),
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("timeout_seconds", self.timeout.as_secs(), 1, 300)?;
        validate_range(
            "frame_interval_ms",
            self.frame_interval.as_millis() as u64,
            10,
            1000,
        )?;
        Ok(())
    }
}
