//! Environment-driven configuration.
//!
//! Required variables have no fallback: a missing or malformed value fails
//! [`AppConfig::load`] and the process must not start.

use anyhow::{Context, Result};
use serde::Deserialize;

const ENV_PREFIX: &str = "MARQUEE";

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level application configuration read from `MARQUEE_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `MARQUEE_PORT`, required.
    pub port: u16,

    /// `MARQUEE_ENV`, required. Reported by the healthcheck endpoint.
    pub env: String,

    /// `MARQUEE_LOG_LEVEL`, optional.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `MARQUEE_LOG_FORMAT`, optional.
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_environment(source: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment")?;

        settings
            .try_deserialize()
            .context("missing or malformed MARQUEE_* environment variable")
    }
}
