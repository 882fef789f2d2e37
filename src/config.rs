//! Service configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOADING_DELAY_MS: u64 = 500;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub port: u16,
    pub api_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Pause between entering the loading state and issuing the request.
    pub loading_delay: Duration,
    pub assets_dir: PathBuf,
    /// Route `POST /api/board/test-error`.
    pub test_routes: bool,
}

impl BoardConfig {
    /// Build typed config from environment variables. All are optional:
    ///
    /// - `PORT`: default 3000
    /// - `USERBOARD_API_URL`: default public JSONPlaceholder `/users`
    /// - `USERBOARD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `USERBOARD_CONNECT_TIMEOUT_SECS`: default 10
    /// - `USERBOARD_LOADING_DELAY_MS`: default 500
    /// - `USERBOARD_ASSETS_DIR`: default `assets/` next to `Cargo.toml`
    /// - `USERBOARD_TEST_ROUTES`: `true`/`false`, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("USERBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let assets_dir = std::env::var("USERBOARD_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));

        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT)?,
            api_url,
            request_timeout: Duration::from_secs(env_parse("USERBOARD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?),
            connect_timeout: Duration::from_secs(env_parse("USERBOARD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?),
            loading_delay: Duration::from_millis(env_parse("USERBOARD_LOADING_DELAY_MS", DEFAULT_LOADING_DELAY_MS)?),
            assets_dir,
            test_routes: env_parse("USERBOARD_TEST_ROUTES", false)?,
        })
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
