//! Local placeholder authenticator.
//!
//! Accepts any non-empty email with a password of at least six characters
//! after a simulated network delay. No account records exist, so sign-in
//! derives the display name from the email's local part.

use std::time::Duration;

use super::{AuthError, Authenticator};
use crate::session::Session;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
pub struct MockAuthenticator {
    latency: Duration,
}

impl MockAuthenticator {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Authenticator with no simulated delay.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

/// The placeholder credential policy. Password length is measured in UTF-16
/// code units, the unit browser form fields report.
#[must_use]
pub fn credentials_acceptable(email: &str, password: &str) -> bool {
    !email.is_empty() && password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

#[async_trait::async_trait]
impl Authenticator for MockAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.simulate_latency().await;
        if !credentials_acceptable(email, password) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Session::from_email(email))
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session, AuthError> {
        self.simulate_latency().await;
        if !credentials_acceptable(email, password) || name.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(Session::new(email, name))
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
