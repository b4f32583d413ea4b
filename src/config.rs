//! Configuration Module
//!
//! Handles loading and managing cache service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};
use crate::error::{CacheError, Result};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// TTL for entries stored without an explicit one
    pub default_ttl: Duration,
    /// Interval between expiry sweeps, `None` disables the background sweep
    pub sweep_interval: Option<Duration>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_SWEEP_INTERVAL_SECS` - Sweep frequency in seconds, 0 disables (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let sweep_secs = env_or("CACHE_SWEEP_INTERVAL_SECS", DEFAULT_SWEEP_INTERVAL.as_secs());

        Self {
            max_size: env_or("CACHE_MAX_SIZE", defaults.max_size),
            default_ttl: Duration::from_millis(env_or(
                "CACHE_DEFAULT_TTL_MS",
                DEFAULT_TTL.as_millis() as u64,
            )),
            sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Rejects values the cache cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_MAX_SIZE must be at least 1".to_string(),
            ));
        }
        if self.default_ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "CACHE_DEFAULT_TTL_MS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            default_ttl: DEFAULT_TTL,
            sweep_interval: Some(DEFAULT_SWEEP_INTERVAL),
            server_port: 3000,
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or parse failure.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.default_ttl, Duration::from_secs(300));
        assert_eq!(config.sweep_interval, Some(Duration::from_secs(60)));
        assert_eq!(config.server_port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touching the environment so parallel tests don't race
        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("CACHE_DEFAULT_TTL_MS");
        env::remove_var("CACHE_SWEEP_INTERVAL_SECS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.default_ttl, Duration::from_secs(300));
        assert_eq!(config.sweep_interval, Some(Duration::from_secs(60)));
        assert_eq!(config.server_port, 3000);

        env::set_var("CACHE_MAX_SIZE", "not-a-number");
        env::set_var("CACHE_DEFAULT_TTL_MS", "1500");
        env::set_var("CACHE_SWEEP_INTERVAL_SECS", "0");

        let config = Config::from_env();
        assert_eq!(config.max_size, 1000);
        assert_eq!(config.default_ttl, Duration::from_millis(1500));
        assert_eq!(config.sweep_interval, None);

        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("CACHE_DEFAULT_TTL_MS");
        env::remove_var("CACHE_SWEEP_INTERVAL_SECS");
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = Config {
            max_size: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));

        let config = Config {
            default_ttl: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));
    }
}
