use std::env;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// Deliver notifications over HTTP instead of only logging them
    pub notifications_enabled: bool,
    /// Bearer token sent with HTTP notifications
    pub notify_api_token: Option<String>,
    /// Request timeout for HTTP notifications
    pub notify_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let notifications_enabled = match lookup("NOTIFICATIONS_ENABLED") {
            Some(value) => parse_bool("NOTIFICATIONS_ENABLED", &value)?,
            None => false,
        };

        let notify_timeout = match lookup("NOTIFY_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(value.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "NOTIFY_TIMEOUT_SECS",
                    value,
                }
            })?),
            None => Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
        };

        Ok(Self {
            notifications_enabled,
            notify_api_token: lookup("NOTIFY_API_TOKEN").filter(|t| !t.is_empty()),
            notify_timeout,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
