// Process configuration.
//
// Every setting has a default, so the service runs with no environment at all:
// it listens on 0.0.0.0:8081 and updates scores every 10 seconds.
//
// Overrides
// - LIVE_SCORES_HOST
// - LIVE_SCORES_PORT
// - LIVE_SCORES_UPDATE_INTERVAL_MS (greater than zero)
// - LIVE_SCORES_SEED (seeds the draws for reproducible runs)

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const HOST_KEY: &str = "LIVE_SCORES_HOST";
pub const PORT_KEY: &str = "LIVE_SCORES_PORT";
pub const UPDATE_INTERVAL_KEY: &str = "LIVE_SCORES_UPDATE_INTERVAL_MS";
pub const SEED_KEY: &str = "LIVE_SCORES_SEED";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub update_interval: Duration,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_KEY) {
            config.host = host;
        }
        if let Some(raw) = lookup(PORT_KEY) {
            config.port = parse(PORT_KEY, &raw)?;
        }
        if let Some(raw) = lookup(UPDATE_INTERVAL_KEY) {
            let millis: u64 = parse(UPDATE_INTERVAL_KEY, &raw)?;
            if millis == 0 {
                return Err(ConfigError::Invalid {
                    key: UPDATE_INTERVAL_KEY,
                    value: raw,
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.update_interval = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(SEED_KEY) {
            config.seed = Some(parse(SEED_KEY, &raw)?);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
