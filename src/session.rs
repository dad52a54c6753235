//! Session record for the signed-in user.
//!
//! DESIGN
//! ======
//! The id is an opaque locally generated token, not a server identity. The
//! serialized form (`{id, email, name}`) is the persisted record layout, so
//! field names must not change without a storage migration.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SESSION_ID_LEN: usize = 9;
const SESSION_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The record representing a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque client-generated token.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
}

impl Session {
    /// Build a session with a freshly generated id.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: generate_session_id(), email: email.into(), name: name.into() }
    }

    /// Build a session whose name is the local part of `email`.
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        Self::new(email, name_from_email(email))
    }
}

/// Generate a random 9-character lowercase base-36 id.
#[must_use]
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    (0..SESSION_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SESSION_ID_ALPHABET.len());
            SESSION_ID_ALPHABET[idx] as char
        })
        .collect()
}

/// Derive a display name from the text before the first `@`. An address
/// starting with `@` yields an empty name.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_owned()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
