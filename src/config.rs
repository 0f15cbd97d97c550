//! Runtime configuration.
//!
//! Resolved from environment variables with built-in defaults; CLI flags in
//! `main.rs` take precedence over both.

use std::env;
use std::time::Duration;

/// Upstream endpoint for the trending repository feed
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.gitterapp.com/";

/// Revalidation window for the cached upstream response (one hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Default port for the local server
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the upstream trending API
    pub upstream_url: String,
    /// How long a fetched response stays valid
    pub cache_ttl: Duration,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let upstream_url =
            env::var("TRENDING_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let cache_ttl_secs: u64 = env::var("TRENDING_CACHE_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_CACHE_TTL_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("TRENDING_CACHE_TTL_SECS"))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        Ok(Self {
            upstream_url,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            port,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
