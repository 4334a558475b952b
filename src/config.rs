//! Configuration management for the assistant bot.
//!
//! Settings only affect diagnostics; the prompt, the commands and the address
//! book are never configured or persisted. A bad value is reported and
//! replaced by its default so it can never keep a session from starting.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_LOG_LEVEL: &str = "error";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: One of trace, debug, info, warn, error, off
    ///
    /// A `.env` file in the working directory is honoured if present.
    /// Loading never fails: every rejected value falls back to its default
    /// and is returned alongside the config so the caller can log it once
    /// logging is up.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        // dotenvy never prints, so stdout stays reserved for the conversation
        let _ = dotenvy::dotenv();

        let mut rejected = Vec::new();

        let log_level = Self::parse_log_level("LOG_LEVEL").unwrap_or_else(|e| {
            rejected.push(e);
            DEFAULT_LOG_LEVEL.to_string()
        });

        (Config { log_level }, rejected)
    }

    /// Read a log level variable, lower-casing and checking it against the known levels.
    fn parse_log_level(var_name: &str) -> ConfigResult<String> {
        let Ok(val) = env::var(var_name) else {
            return Ok(DEFAULT_LOG_LEVEL.to_string());
        };

        let level = val.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            });
        }

        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
