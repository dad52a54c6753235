use super::*;

#[test]
fn retryable_covers_transport_and_server_errors() {
    assert!(AuthError::Request("timed out".into()).retryable());
    assert!(AuthError::Response { status: 503, body: String::new() }.retryable());
    assert!(AuthError::Response { status: 429, body: String::new() }.retryable());
}

#[test]
fn retryable_excludes_client_rejections() {
    assert!(!AuthError::InvalidCredentials.retryable());
    assert!(!AuthError::AccountLocked.retryable());
    assert!(!AuthError::InvalidInput("email is required").retryable());
    assert!(!AuthError::Response { status: 400, body: String::new() }.retryable());
    assert!(!AuthError::Parse("eof".into()).retryable());
}

#[test]
fn display_messages() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(
        AuthError::Response { status: 502, body: "bad gateway".into() }.to_string(),
        "auth response error: status 502"
    );
}
