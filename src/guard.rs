//! Route guard gating protected screens on session presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens build a `RouteGuard` from the session store. Producing a
//! view is side-effect free; the redirect to `/login` is issued by a separate
//! subscription task installed with [`RouteGuard::install_unauth_redirect`],
//! so it fires whenever the store transitions to signed-out (including a
//! sign-out while the screen is open), not as part of rendering.
//!
//! STATES
//! ======
//! `Loading -> {Authenticated, Unauthenticated}`; `Authenticated ->
//! Unauthenticated` only via sign-out. Nothing returns to `Loading`.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::routes::LOGIN_ROUTE;
use crate::session::Session;
use crate::store::{AuthState, SessionStore};

/// Navigation side effect. Implemented for any `Fn(&str)` closure.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl From<&AuthState> for GuardState {
    fn from(state: &AuthState) -> Self {
        match (&state.user, state.loading) {
            (_, true) => Self::Loading,
            (Some(user), false) => Self::Authenticated(user.clone()),
            (None, false) => Self::Unauthenticated,
        }
    }
}

/// What a guarded screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardView<T> {
    /// Non-interactive placeholder while the session check runs.
    Placeholder,
    /// Nothing; a redirect to the login route is pending.
    Redirecting,
    Protected(T),
}

/// Whether an unauthenticated redirect is due.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub struct RouteGuard {
    state: watch::Receiver<AuthState>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(store: &SessionStore) -> Self {
        Self { state: store.subscribe() }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        GuardState::from(&*self.state.borrow())
    }

    /// Produce the view for the current state, calling `children` only when
    /// a session is present.
    #[must_use]
    pub fn view<T, F>(&self, children: F) -> GuardView<T>
    where
        F: FnOnce(&Session) -> T,
    {
        match self.state() {
            GuardState::Loading => GuardView::Placeholder,
            GuardState::Unauthenticated => GuardView::Redirecting,
            GuardState::Authenticated(session) => GuardView::Protected(children(&session)),
        }
    }

    /// Navigate to the login route each time the store enters the signed-out
    /// state, for as long as the returned handle lives.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use = "dropping the handle uninstalls the redirect"]
    pub fn install_unauth_redirect<N: Navigator>(&self, navigator: N) -> GuardHandle {
        let mut rx = self.state.clone();
        let task = tokio::spawn(async move {
            loop {
                // Intermediate values may be skipped; every published change
                // that lands signed out is a fresh entry into that state.
                if should_redirect_unauth(&rx.borrow_and_update()) {
                    tracing::debug!(to = LOGIN_ROUTE, "redirecting unauthenticated viewer");
                    navigator.navigate(LOGIN_ROUTE);
                }

                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
        GuardHandle { task }
    }
}

/// Keeps an installed redirect alive. Dropping it stops the subscription.
pub struct GuardHandle {
    task: JoinHandle<()>,
}

impl GuardHandle {
    pub fn uninstall(self) {
        drop(self);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for GuardHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
