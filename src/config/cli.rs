use crate::config::settings::Settings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "rating-predictor")]
#[command(about = "Predict a star rating for customer feedback")]
pub struct CliConfig {
    /// Feedback text; read from stdin when omitted
    pub feedback: Option<String>,

    /// Prediction endpoint (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the demo heuristic's random draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the settled result without animating it
    #[arg(long)]
    pub no_animate: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the result as JSON instead of drawing the modal
    #[arg(long)]
    pub json: bool,

    /// Query the prediction service's health check and exit
    #[arg(long)]
    pub health: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file when given and applies command line overrides.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                Settings::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }
        if self.no_animate || self.json {
            settings.animate = false;
        }
        if self.no_color {
            settings.color = false;
        }

        Ok(settings)
    }
}
