//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present but never required; every
//! setting has a working default so the bot runs with no environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead (inclusive) scanned by the `birthdays` command (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ABOOK_BIRTHDAY_WINDOW_DAYS`: Upcoming birthdays window in days (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u64("ABOOK_BIRTHDAY_WINDOW_DAYS", 7)?;

        // A window longer than a year would visit the same anniversary twice
        if birthday_window_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "ABOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
