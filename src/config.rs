//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::http::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpTimeouts};
use crate::auth::mock::DEFAULT_LATENCY;
use crate::auth::{AuthError, Authenticator, HttpAuthenticator, MockAuthenticator};

pub const DEFAULT_STORAGE_PATH: &str = ".quill/storage.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Local placeholder policy with simulated latency.
    Mock { latency: Duration },
    /// Remote credential service.
    Http { base_url: String, timeouts: HttpTimeouts },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuillConfig {
    pub auth: AuthMode,
    pub storage_path: PathBuf,
}

impl QuillConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `QUILL_AUTH_MODE`: `mock` (default) or `http`
    /// - `QUILL_AUTH_BASE_URL`: required when mode is `http`
    /// - `QUILL_AUTH_LATENCY_MS`: mock delay, default 500
    /// - `QUILL_AUTH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `QUILL_AUTH_CONNECT_TIMEOUT_SECS`: default 10
    /// - `QUILL_STORAGE_PATH`: default `.quill/storage.json`
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown auth mode or a missing base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth = parse_auth_mode(
            std::env::var("QUILL_AUTH_MODE").ok().as_deref(),
            std::env::var("QUILL_AUTH_BASE_URL").ok(),
            Duration::from_millis(env_parse_u64("QUILL_AUTH_LATENCY_MS", duration_millis(DEFAULT_LATENCY))),
            HttpTimeouts {
                request_secs: env_parse_u64("QUILL_AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("QUILL_AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        )?;
        let storage_path = std::env::var("QUILL_STORAGE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);

        Ok(Self { auth, storage_path })
    }

    /// Construct the configured authenticator.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>, ConfigError> {
        Ok(match &self.auth {
            AuthMode::Mock { latency } => Arc::new(MockAuthenticator::new(*latency)),
            AuthMode::Http { base_url, timeouts } => Arc::new(HttpAuthenticator::new(base_url, *timeouts)?),
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn parse_auth_mode(
    raw: Option<&str>,
    base_url: Option<String>,
    latency: Duration,
    timeouts: HttpTimeouts,
) -> Result<AuthMode, ConfigError> {
    match raw.unwrap_or("mock") {
        "mock" => Ok(AuthMode::Mock { latency }),
        "http" => {
            let base_url = base_url
                .filter(|url| !url.trim().is_empty())
                .ok_or(ConfigError::Missing { var: "QUILL_AUTH_BASE_URL" })?;
            Ok(AuthMode::Http { base_url, timeouts })
        }
        other => Err(ConfigError::Parse(format!(
            "unsupported QUILL_AUTH_MODE '{other}' (expected 'mock' or 'http')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
