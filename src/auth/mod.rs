//! Credential verification behind a swappable seam.
//!
//! DESIGN
//! ======
//! The session store never decides whether credentials are valid; it asks an
//! `Authenticator`. `MockAuthenticator` reproduces the local placeholder
//! policy (any email, any password of six or more characters) and
//! `HttpAuthenticator` calls a real credential service. Both hand back a
//! verified `Session` or a typed `AuthError`.

pub mod http;
pub mod mock;

pub use http::HttpAuthenticator;
pub use mock::MockAuthenticator;

use crate::session::Session;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by sign-in and sign-up attempts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A required field was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The account exists but may not sign in.
    #[error("account locked")]
    AccountLocked,

    /// The request never produced a response (connect failure, timeout).
    #[error("auth request failed: {0}")]
    Request(String),

    /// The service answered with an unexpected status.
    #[error("auth response error: status {status}")]
    Response { status: u16, body: String },

    /// The service answered 2xx with a body that is not a session.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl AuthError {
    /// Whether retrying the same request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify existing credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when the credentials are rejected or the
    /// verification service cannot be reached.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account and open a session for it.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] when registration is rejected or the
    /// verification service cannot be reached.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session, AuthError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
