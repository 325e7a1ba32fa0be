// src/config.rs
use log::warn;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::services::history::{DEFAULT_HISTORY_KEY, DEFAULT_MAX_ENTRIES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub history_dir: PathBuf,
    pub history_key: String,
    /// `None` keeps every entry.
    pub history_limit: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 3030,
            history_dir: PathBuf::from("./data"),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            history_limit: Some(DEFAULT_MAX_ENTRIES),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv().ok()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { key: "PORT", value })?,
            None => {
                warn!("$PORT not set, defaulting to {}", defaults.port);
                defaults.port
            }
        };

        let history_dir = lookup("HISTORY_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.history_dir);

        let history_key = lookup("HISTORY_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or(defaults.history_key);

        let history_limit = match lookup("HISTORY_LIMIT") {
            Some(value) => {
                let limit = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidNumber { key: "HISTORY_LIMIT", value })?;
                if limit == 0 { None } else { Some(limit) }
            }
            None => defaults.history_limit,
        };

        Ok(AppConfig {
            port,
            history_dir,
            history_key,
            history_limit,
        })
    }
}
