//! Session store: the single owner of the current session.
//!
//! DESIGN
//! ======
//! State is published through a `tokio::sync::watch` channel so the route
//! guard and any UI can subscribe instead of polling. The store is an
//! ordinary value constructed with its storage and authenticator, never a
//! global, so each test or request context gets its own.
//!
//! LIFECYCLE
//! =========
//! `new` publishes `loading = true`. `initialize` rehydrates the persisted
//! record once and clears `loading`; there is no way back into loading.
//! Sign-in and sign-up persist the verified session under `"user"`; sign-out
//! clears it and removes the key.
//!
//! TRADE-OFFS
//! ==========
//! There is no reentrancy guard: two overlapping sign-ins both write, and the
//! later completion wins. Callers disable duplicate submission instead (see
//! `login::LoginForm`).

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::auth::{AuthError, Authenticator};
use crate::session::Session;
use crate::storage::{self, KeyValueStore};

/// Storage key of the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<AuthState>,
    storage: Arc<dyn KeyValueStore>,
    auth: Arc<dyn Authenticator>,
}

impl SessionStore {
    /// Create a store in the loading state. Call [`Self::initialize`] next.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, auth: Arc<dyn Authenticator>) -> Self {
        let (state, _) = watch::channel(AuthState { user: None, loading: true });
        Self { inner: Arc::new(StoreInner { state, storage, auth }) }
    }

    /// Create a store and immediately rehydrate it from storage.
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>, auth: Arc<dyn Authenticator>) -> Self {
        let store = Self::new(storage, auth);
        store.initialize();
        store
    }

    /// Adopt the persisted session, if any, and clear the loading flag.
    ///
    /// Missing or malformed records leave the store signed out. Only the
    /// first call has an effect.
    pub fn initialize(&self) {
        if !self.inner.state.borrow().loading {
            return;
        }

        let user: Option<Session> = storage::load_json(self.inner.storage.as_ref(), SESSION_STORAGE_KEY);
        match &user {
            Some(session) => info!(email = %session.email, "restored persisted session"),
            None => debug!("no persisted session"),
        }

        self.inner.state.send_modify(|state| {
            if state.user.is_none() {
                state.user = user;
            }
            state.loading = false;
        });
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<Session> {
        self.inner.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    /// Receiver that observes every state change for the store's lifetime.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Sign in; `true` when the session was established.
    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        self.try_sign_in(email, password).await.is_ok()
    }

    /// Sign up; `true` when the session was established.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> bool {
        self.try_sign_up(email, password, name).await.is_ok()
    }

    /// Sign in and report the typed failure on rejection.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's [`AuthError`]; state is untouched.
    pub async fn try_sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.inner.auth.sign_in(email, password).await.inspect_err(|e| {
            info!(error = %e, "sign-in rejected");
        })?;
        self.adopt(session.clone());
        info!(email = %session.email, "signed in");
        Ok(session)
    }

    /// Sign up and report the typed failure on rejection.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's [`AuthError`]; state is untouched.
    pub async fn try_sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session, AuthError> {
        let session = self.inner.auth.sign_up(email, password, name).await.inspect_err(|e| {
            info!(error = %e, "sign-up rejected");
        })?;
        self.adopt(session.clone());
        info!(email = %session.email, "signed up");
        Ok(session)
    }

    /// Clear the session and its persisted record. Idempotent.
    pub fn sign_out(&self) {
        if let Err(e) = self.inner.storage.remove_item(SESSION_STORAGE_KEY) {
            warn!(error = %e, "failed to remove persisted session");
        }
        let was_signed_in = self.inner.state.send_if_modified(|state| state.user.take().is_some());
        if was_signed_in {
            info!("signed out");
        }
    }

    fn adopt(&self, session: Session) {
        if let Err(e) = storage::save_json(self.inner.storage.as_ref(), SESSION_STORAGE_KEY, &session) {
            warn!(error = %e, "failed to persist session");
        }
        self.inner.state.send_modify(|state| state.user = Some(session));
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
