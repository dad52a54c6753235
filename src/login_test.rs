use super::*;
use std::sync::Arc;

use crate::auth::MockAuthenticator;
use crate::storage::MemoryStorage;

fn open_store() -> SessionStore {
    SessionStore::open(Arc::new(MemoryStorage::new()), Arc::new(MockAuthenticator::instant()))
}

fn filled(mode: FormMode, email: &str, password: &str, name: &str) -> LoginForm {
    let mut form = LoginForm::new(mode);
    form.email = email.to_owned();
    form.password = password.to_owned();
    form.name = name.to_owned();
    form
}

#[test]
fn default_form_is_sign_in_and_idle() {
    let form = LoginForm::default();
    assert_eq!(form.mode, FormMode::SignIn);
    assert!(!form.is_busy());
    assert!(form.error().is_none());
}

#[test]
fn toggle_mode_clears_error() {
    let mut form = filled(FormMode::SignIn, "a@b.com", "short", "");
    form.finish_submit(false);
    assert_eq!(form.error(), Some(SIGN_IN_FAILED_MESSAGE));

    form.toggle_mode();
    assert_eq!(form.mode, FormMode::SignUp);
    assert!(form.error().is_none());
    form.toggle_mode();
    assert_eq!(form.mode, FormMode::SignIn);
}

#[test]
fn begin_submit_sign_up_requires_name() {
    let mut form = filled(FormMode::SignUp, "a@b.com", "secret1", "");
    assert_eq!(form.begin_submit(), Err(SubmitOutcome::Failed(MISSING_NAME_MESSAGE)));
    assert_eq!(form.error(), Some(MISSING_NAME_MESSAGE));
    assert!(!form.is_busy());
}

#[test]
fn begin_submit_refuses_while_busy() {
    let mut form = filled(FormMode::SignIn, "a@b.com", "secret1", "");
    assert_eq!(
        form.begin_submit(),
        Ok(SubmitRequest::SignIn { email: "a@b.com".into(), password: "secret1".into() })
    );
    assert!(form.is_busy());
    assert_eq!(form.begin_submit(), Err(SubmitOutcome::Busy));

    form.finish_submit(true);
    assert!(!form.is_busy());
}

#[tokio::test]
async fn submit_sign_in_success_navigates_to_upload() {
    let store = open_store();
    let mut form = filled(FormMode::SignIn, "a@b.com", "secret1", "");
    assert_eq!(form.submit(&store).await, SubmitOutcome::Navigate("/upload"));
    assert!(form.error().is_none());
    assert_eq!(store.user().unwrap().name, "a");
}

#[tokio::test]
async fn submit_sign_in_failure_sets_message() {
    let store = open_store();
    let mut form = filled(FormMode::SignIn, "a@b.com", "short", "");
    assert_eq!(form.submit(&store).await, SubmitOutcome::Failed(SIGN_IN_FAILED_MESSAGE));
    assert_eq!(form.error(), Some(SIGN_IN_FAILED_MESSAGE));
    assert!(!form.is_busy());
    assert!(store.user().is_none());
}

#[tokio::test]
async fn submit_sign_up_success_uses_name() {
    let store = open_store();
    let mut form = filled(FormMode::SignUp, "a@b.com", "secret1", "Ada");
    assert_eq!(form.submit(&store).await, SubmitOutcome::Navigate(POST_LOGIN_ROUTE));
    assert_eq!(store.user().unwrap().name, "Ada");
}

#[tokio::test]
async fn submit_sign_up_failure_sets_message() {
    let store = open_store();
    let mut form = filled(FormMode::SignUp, "a@b.com", "short", "Ada");
    assert_eq!(form.submit(&store).await, SubmitOutcome::Failed(SIGN_UP_FAILED_MESSAGE));
    assert!(store.user().is_none());
}

#[tokio::test]
async fn submit_clears_previous_error_on_success() {
    let store = open_store();
    let mut form = filled(FormMode::SignIn, "a@b.com", "short", "");
    form.submit(&store).await;
    form.password = "secret1".into();
    assert_eq!(form.submit(&store).await, SubmitOutcome::Navigate(POST_LOGIN_ROUTE));
    assert!(form.error().is_none());
}
