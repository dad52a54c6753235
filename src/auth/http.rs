//! HTTP client for a credential-verification service.
//!
//! Thin wrapper over `POST /api/auth/sign-in` and `POST /api/auth/sign-up`.
//! Status mapping lives in `map_status` and body parsing in `parse_session`
//! so both stay testable without a server.

use std::time::Duration;

use serde::Serialize;

use super::{AuthError, Authenticator};
use crate::session::Session;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const SIGN_IN_PATH: &str = "/api/auth/sign-in";
const SIGN_UP_PATH: &str = "/api/auth/sign-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAuthenticator {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthenticator {
    /// Build a client rooted at `base_url` (trailing slashes ignored).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeouts: HttpTimeouts) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Session, AuthError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::debug!(%url, status, "auth service rejected request");
            return Err(map_status(status, text));
        }

        parse_session(&text)
    }
}

#[async_trait::async_trait]
impl Authenticator for HttpAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.post(SIGN_IN_PATH, &SignInRequest { email, password }).await
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session, AuthError> {
        self.post(SIGN_UP_PATH, &SignUpRequest { email, password, name }).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

// =============================================================================
// PARSING
// =============================================================================

fn map_status(status: u16, body: String) -> AuthError {
    match status {
        401 => AuthError::InvalidCredentials,
        422 => AuthError::InvalidInput("rejected by auth service"),
        423 => AuthError::AccountLocked,
        _ => AuthError::Response { status, body },
    }
}

fn parse_session(json: &str) -> Result<Session, AuthError> {
    serde_json::from_str(json).map_err(|e| AuthError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
