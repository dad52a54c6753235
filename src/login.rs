//! Sign-in / sign-up form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the login screen's field values, inline error, and busy flag. The
//! busy flag is the duplicate-submission guard the session store itself does
//! not have: `begin_submit` refuses while a previous attempt is in flight.
//! UIs that drive the store asynchronously call `begin_submit` /
//! `finish_submit` around their own task; everything else uses `submit`.

use crate::routes::POST_LOGIN_ROUTE;
use crate::store::SessionStore;

pub const MISSING_NAME_MESSAGE: &str = "Please enter your name";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Invalid email or password";
pub const SIGN_UP_FAILED_MESSAGE: &str = "Sign up failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

/// A validated submission ready to hand to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Authentication succeeded; go to this route.
    Navigate(&'static str),
    /// Shown inline; also stored in `LoginForm::error`.
    Failed(&'static str),
    /// A previous submission is still in flight.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mode: FormMode,
    pub email: String,
    pub password: String,
    pub name: String,
    error: Option<&'static str>,
    busy: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        Self { mode, ..Self::default() }
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Flip between sign-in and sign-up, clearing any inline error.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        };
        self.error = None;
    }

    /// Validate the fields and mark the form busy.
    ///
    /// # Errors
    ///
    /// Returns the outcome to report instead of a request when the form is
    /// already busy or sign-up lacks a name.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitOutcome> {
        if self.busy {
            return Err(SubmitOutcome::Busy);
        }
        self.error = None;

        let request = match self.mode {
            FormMode::SignIn => SubmitRequest::SignIn { email: self.email.clone(), password: self.password.clone() },
            FormMode::SignUp => {
                if self.name.is_empty() {
                    self.error = Some(MISSING_NAME_MESSAGE);
                    return Err(SubmitOutcome::Failed(MISSING_NAME_MESSAGE));
                }
                SubmitRequest::SignUp {
                    email: self.email.clone(),
                    password: self.password.clone(),
                    name: self.name.clone(),
                }
            }
        };

        self.busy = true;
        Ok(request)
    }

    /// Record the store's answer and clear the busy flag.
    pub fn finish_submit(&mut self, success: bool) -> SubmitOutcome {
        self.busy = false;
        if success {
            return SubmitOutcome::Navigate(POST_LOGIN_ROUTE);
        }
        let message = match self.mode {
            FormMode::SignIn => SIGN_IN_FAILED_MESSAGE,
            FormMode::SignUp => SIGN_UP_FAILED_MESSAGE,
        };
        self.error = Some(message);
        SubmitOutcome::Failed(message)
    }

    /// Validate, call the store, and record the result.
    pub async fn submit(&mut self, store: &SessionStore) -> SubmitOutcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let success = match &request {
            SubmitRequest::SignIn { email, password } => store.sign_in(email, password).await,
            SubmitRequest::SignUp { email, password, name } => store.sign_up(email, password, name).await,
        };
        self.finish_submit(success)
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
