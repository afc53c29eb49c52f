pub mod defaults;
pub mod insight_config;
pub mod observability_config;
pub mod prediction_config;

pub use insight_config::InsightConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ThroneError, ThroneResult};

/// Top-level configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroneConfig {
    pub prediction: PredictionConfig,
    pub insights: InsightConfig,
    pub observability: ObservabilityConfig,
}

impl ThroneConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse and validate in one step.
    pub fn load(s: &str) -> ThroneResult<Self> {
        let config = Self::from_toml(s).map_err(|e| ThroneError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ThroneResult<()> {
        self.prediction.validate()?;
        self.insights.validate()
    }
}
