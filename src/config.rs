//! Client configuration loaded from the environment
//!
//! Variables (a `.env` file in the working directory is honored):
//! - `AGENTPUT_API_URL`: backend base URL including the `/api` prefix
//! - `AGENTPUT_TIMEOUT_SECS`: overall per-request timeout
//! - `AGENTPUT_TOKEN_FILE`: where the session token is persisted
//! - `AGENTPUT_PAGE_SIZE`: rows per page in list views

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub token_path: PathBuf,
    pub page_size: usize,
}

impl ClientConfig {
    /// Reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("AGENTPUT_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::debug!("AGENTPUT_API_URL not set, using {}", DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            });

        let timeout_secs = parse_positive(&lookup, "AGENTPUT_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS as usize);
        let page_size =
            parse_positive(&lookup, "AGENTPUT_PAGE_SIZE")?.unwrap_or(DEFAULT_PAGE_SIZE);

        let token_path = lookup("AGENTPUT_TOKEN_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_token_path);

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs as u64),
            token_path,
            page_size,
        })
    }

    /// Replaces the backend base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_path: default_token_path(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ConfigError::InvalidNumber { key, value: raw }),
        },
    }
}

/// `<config dir>/agentput/token`, or `.agentput_token` when no config dir exists
fn default_token_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("agentput").join("token"),
        None => {
            tracing::warn!("no user config directory, storing token in the working directory");
            PathBuf::from(".agentput_token")
        }
    }
}
