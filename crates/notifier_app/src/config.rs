//! Environment-sourced configuration.

use std::env;
use std::time::Duration;

use log::LevelFilter;
use notifier_engine::{EmptyPolicy, DEFAULT_ENDPOINT};
use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing or empty")]
    MissingCredential(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
    pub empty_policy: EmptyPolicy,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// The three credentials are required; everything else has a default.
    /// A missing credential is fatal at startup, before any network call.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let practicum_token = require(&lookup, "PRACTICUM_TOKEN")?;
        let telegram_token = require(&lookup, "TELEGRAM_TOKEN")?;
        let chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?;

        let endpoint =
            lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = match lookup("POLL_INTERVAL_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "POLL_INTERVAL_SECS",
                    reason: format!("not a number of seconds: {raw:?}"),
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_POLL_INTERVAL,
        };

        let empty_policy = match lookup("NOTIFY_ON_EMPTY").as_deref() {
            Some("1") | Some("true") | Some("yes") => EmptyPolicy::Notify,
            _ => EmptyPolicy::LogOnly,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "LOG_LEVEL",
                reason: format!("unknown severity {raw:?}"),
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
            empty_policy,
            log_level,
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential(name)),
    }
}
