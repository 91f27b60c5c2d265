use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use validation::PipelineConfig;

use crate::kernel::jobs::BatchCoordinatorConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Concurrent records per batch job
    pub worker_concurrency: usize,
    /// Per-source-call timeout; `None` disables the limit
    pub source_timeout: Option<Duration>,
    /// Validation mode tag applied when a batch request omits one
    pub default_validation_mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_concurrency: 4,
            source_timeout: None,
            default_validation_mode: "full".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let worker_concurrency = env::var("VALIDATION_WORKER_CONCURRENCY")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .context("VALIDATION_WORKER_CONCURRENCY must be a valid number")?;

        let source_timeout = match env::var("VALIDATION_SOURCE_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse()
                    .context("VALIDATION_SOURCE_TIMEOUT_SECS must be a valid number")?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            worker_concurrency,
            source_timeout,
            default_validation_mode: env::var("VALIDATION_DEFAULT_MODE")
                .unwrap_or_else(|_| "full".to_string()),
        })
    }

    /// Pipeline configuration derived from this config.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            source_timeout: self.source_timeout,
        }
    }

    /// Coordinator configuration derived from this config.
    pub fn coordinator_config(&self) -> BatchCoordinatorConfig {
        BatchCoordinatorConfig::with_concurrency(self.worker_concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.worker_concurrency, 4);
        assert!(config.source_timeout.is_none());
        assert_eq!(config.default_validation_mode, "full");
    }

    #[test]
    fn derived_configs_carry_settings_through() {
        let config = Config {
            worker_concurrency: 8,
            source_timeout: Some(Duration::from_secs(3)),
            default_validation_mode: "full".to_string(),
        };

        assert_eq!(
            config.pipeline_config().source_timeout,
            Some(Duration::from_secs(3))
        );
        assert_eq!(config.coordinator_config().concurrency, 8);
    }
}
