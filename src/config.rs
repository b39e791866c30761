//! Runtime configuration for presto-metrico
//!
//! Resolves CLI arguments (and the coordinator environment fallback) into an
//! immutable settings struct handed to the rest of the process by value.

use std::time::Duration;

use thiserror::Error;

use crate::cli::Cli;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither --coordinator nor the fallback environment variable was set
    #[error("no coordinator address given and environment variable {0} is not set")]
    MissingCoordinator(String),

    /// A setting failed validation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Resolved process settings, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Coordinator origin (scheme + host[:port]), used as-is
    pub coordinator: String,
    /// Dogstatsd agent address
    pub dogstatsd: String,
    /// Interval between metric sweeps
    pub interval: Duration,
    /// Statsd namespace prefix
    pub namespace: String,
    /// Coordinator HTTP timeout in milliseconds
    pub http_timeout_ms: u64,
}

impl Config {
    /// Resolve configuration from parsed CLI arguments.
    ///
    /// The coordinator address comes from `--coordinator` when given and
    /// non-empty, otherwise from the environment variable named by
    /// `--coordinator-env`.
    ///
    /// # Errors
    /// Returns an error if the coordinator address cannot be resolved or a
    /// setting fails validation
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let coordinator = match cli.coordinator.as_deref() {
            Some(addr) if !addr.is_empty() => addr.to_string(),
            _ => std::env::var(&cli.coordinator_env)
                .ok()
                .filter(|addr| !addr.is_empty())
                .ok_or_else(|| ConfigError::MissingCoordinator(cli.coordinator_env.clone()))?,
        };

        let config = Self {
            coordinator,
            dogstatsd: cli.dogstatsd.clone(),
            interval: Duration::from_secs(cli.interval),
            namespace: cli.namespace.clone(),
            http_timeout_ms: cli.http_timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::Invalid(
                "interval must be greater than zero".to_string(),
            ));
        }

        if self.http_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "http timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
