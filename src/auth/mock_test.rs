use super::*;

#[test]
fn credentials_acceptable_policy() {
    assert!(credentials_acceptable("a@b.com", "secret1"));
    assert!(credentials_acceptable("a@b.com", "sixsix"));
    assert!(!credentials_acceptable("a@b.com", "short"));
    assert!(!credentials_acceptable("", "secret1"));
}

#[test]
fn password_length_counts_utf16_units() {
    assert!(credentials_acceptable("a@b.com", "éééééé"));
    assert!(!credentials_acceptable("a@b.com", "ééééé"));
    // Astral-plane characters take two units each.
    assert!(credentials_acceptable("a@b.com", "😀😀😀"));
    assert!(!credentials_acceptable("a@b.com", "😀😀"));
}

#[tokio::test]
async fn sign_in_derives_name_from_email() {
    let auth = MockAuthenticator::instant();
    let session = auth.sign_in("a@b.com", "secret1").await.unwrap();
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.name, "a");
    assert_eq!(session.id.len(), 9);
}

#[tokio::test]
async fn sign_in_rejects_short_password() {
    let auth = MockAuthenticator::instant();
    assert_eq!(auth.sign_in("a@b.com", "short").await, Err(AuthError::InvalidCredentials));
}

#[tokio::test]
async fn sign_up_uses_supplied_name() {
    let auth = MockAuthenticator::instant();
    let session = auth.sign_up("a@b.com", "secret1", "Ada").await.unwrap();
    assert_eq!(session.name, "Ada");
}

#[tokio::test]
async fn sign_up_requires_name() {
    let auth = MockAuthenticator::instant();
    assert_eq!(auth.sign_up("a@b.com", "secret1", "").await, Err(AuthError::InvalidCredentials));
}

#[tokio::test(start_paused = true)]
async fn sign_in_waits_for_simulated_latency() {
    let auth = MockAuthenticator::default();
    assert_eq!(auth.latency(), DEFAULT_LATENCY);

    let start = tokio::time::Instant::now();
    auth.sign_in("a@b.com", "secret1").await.unwrap();
    assert!(start.elapsed() >= DEFAULT_LATENCY);
}
