//! Logging configuration (env-driven).

use anyhow::{bail, Result};

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of text.
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = var("GLOBAL_ID_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_json = match var("GLOBAL_ID_LOG_FORMAT").as_deref() {
            None | Some("text") => false,
            Some("json") => true,
            Some(other) => bail!("GLOBAL_ID_LOG_FORMAT must be 'text' or 'json', got '{other}'."),
        };

        Ok(Self {
            log_level,
            log_json,
        })
    }
}
