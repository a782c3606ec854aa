//! Gateway configuration
//!
//! Read from environment variables, after an optional `.env` file has been
//! loaded into the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::logging::{LogFormat, LoggingConfig};

pub const ENV_HOST: &str = "GATEWAY_HOST";
pub const ENV_PORT: &str = "GATEWAY_PORT";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_TRADES_DEFAULT_LIMIT: &str = "TRADES_DEFAULT_LIMIT";
pub const ENV_TRADES_MAX_LIMIT: &str = "TRADES_MAX_LIMIT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Bounds for the `limit` query parameter of the trades endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl TradeLimits {
    /// Resolve a requested limit: absent means the default, anything above
    /// the maximum is clamped to it
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

impl Default for TradeLimits {
    fn default() -> Self {
        Self {
            default_limit: matching_engine::engine::DEFAULT_TRADE_LIMIT,
            max_limit: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub logging: LoggingConfig,
    pub trades: TradeLimits,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            logging: LoggingConfig::default(),
            trades: TradeLimits::default(),
        }
    }
}

impl GatewayConfig {
    /// Load from the process environment. A missing `.env` file is fine.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for
    /// absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: parse_or(&lookup, ENV_HOST, defaults.host)?,
            port: parse_or(&lookup, ENV_PORT, defaults.port)?,
            logging: LoggingConfig {
                level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.logging.level),
                format: parse_or(&lookup, ENV_LOG_FORMAT, defaults.logging.format)?,
            },
            trades: TradeLimits {
                default_limit: parse_or(
                    &lookup,
                    ENV_TRADES_DEFAULT_LIMIT,
                    defaults.trades.default_limit,
                )?,
                max_limit: parse_or(&lookup, ENV_TRADES_MAX_LIMIT, defaults.trades.max_limit)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trades.max_limit == 0 {
            return Err(ConfigError::Invalid(format!(
                "{ENV_TRADES_MAX_LIMIT} must be greater than 0"
            )));
        }
        if self.trades.default_limit > self.trades.max_limit {
            return Err(ConfigError::Invalid(format!(
                "{ENV_TRADES_DEFAULT_LIMIT} ({}) exceeds {ENV_TRADES_MAX_LIMIT} ({})",
                self.trades.default_limit, self.trades.max_limit
            )));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
