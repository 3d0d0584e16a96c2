//! Estimator configuration
//!
//! Defaults come from the build-time constants. Library callers may build
//! alternative configurations (a different `beta`, a mirror of the source
//! document) and run them side by side in one process.

use crate::{DEFAULT_BETA, DEFAULT_TIMEOUT_SECS, SOURCE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("beta must be a finite number > 0, got {0}")]
    InvalidBeta(f64),

    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// Smoothing constant; ranks below `1 + beta` use the exact reciprocal
    pub beta: f64,

    /// Document the letter statistics are taken from
    pub source_url: String,

    /// Timeout for the whole retrieval request
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            source_url: SOURCE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("zipf-pi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl EstimatorConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(ConfigError::InvalidBeta(self.beta));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
