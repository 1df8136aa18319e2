use std::sync::{Arc, Mutex};

use serde_json::json;

use super::*;
use crate::state::session::SessionStatus;
use crate::util::token_store::{MemoryStorage, TokenStore};

fn session() -> (MemoryStorage, SessionStore) {
    let storage = MemoryStorage::new();
    (storage.clone(), SessionStore::new(TokenStore::new(storage)))
}

fn ok_with_token(token: &str) -> Result<Envelope<AuthPayload>, ApiError> {
    Ok(Envelope {
        success: true,
        message: Some("Login successful".into()),
        data: Some(AuthPayload { token: Some(token.to_owned()), user: None }),
    })
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn credentials_serialize_as_email_and_password() {
    let body = Credentials { email: "a@b.co".into(), password: "pw".into() };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"email": "a@b.co", "password": "pw"}));
}

#[test]
fn signup_omits_missing_secret_code() {
    let mut fields = SignupFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "Str0ng!pass".into(),
        secret_code: None,
    };
    let value = serde_json::to_value(&fields).unwrap();
    assert!(value.get("secretCode").is_none());

    fields.secret_code = Some("ADMIN".into());
    let value = serde_json::to_value(&fields).unwrap();
    assert_eq!(value["secretCode"], json!("ADMIN"));
}

// =============================================================
// complete_auth
// =============================================================

#[test]
fn successful_login_persists_token_and_notifies() {
    let (_, session) = session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(move |s| sink.lock().unwrap().push(s));

    let outcome = complete_auth(&session, ok_with_token("jwt-123"), AuthFlow::Login);

    assert_eq!(outcome, AuthOutcome::SignedIn);
    assert_eq!(session.tokens().get().as_deref(), Some("jwt-123"));
    assert_eq!(*seen.lock().unwrap(), vec![SessionStatus::LoggedIn]);
}

#[test]
fn rejection_uses_server_message_and_stores_nothing() {
    let (_, session) = session();
    let result = Ok(Envelope {
        success: false,
        message: Some("Invalid credentials".into()),
        data: None,
    });
    let outcome = complete_auth(&session, result, AuthFlow::Login);
    assert_eq!(outcome, AuthOutcome::Rejected("Invalid credentials".into()));
    assert!(!session.is_logged_in());
}

#[test]
fn rejection_without_message_falls_back_per_flow() {
    let (_, session) = session();
    let result = || Ok(Envelope { success: false, message: None, data: None });
    assert_eq!(
        complete_auth(&session, result(), AuthFlow::Login),
        AuthOutcome::Rejected("Login failed".into())
    );
    assert_eq!(
        complete_auth(&session, result(), AuthFlow::Signup),
        AuthOutcome::Rejected("Signup failed".into())
    );
}

#[test]
fn transport_failure_is_distinct_from_rejection() {
    let (_, session) = session();
    let outcome = complete_auth(&session, Err(ApiError::Transport("offline".into())), AuthFlow::Signup);
    assert_eq!(outcome, AuthOutcome::Failed("An error occurred during signup".into()));
}

#[test]
fn success_without_token_is_rejected() {
    let (_, session) = session();
    for data in [None, Some(AuthPayload::default()), Some(AuthPayload { token: Some(String::new()), user: None })] {
        let result = Ok(Envelope { success: true, message: None, data });
        assert_eq!(
            complete_auth(&session, result, AuthFlow::Login),
            AuthOutcome::Rejected(MISSING_TOKEN_MESSAGE.into())
        );
    }
    assert!(!session.is_logged_in());
}

#[test]
fn storage_failure_is_reported_not_signed_in() {
    let (storage, session) = session();
    storage.set_available(false);
    let outcome = complete_auth(&session, ok_with_token("jwt"), AuthFlow::Login);
    assert_eq!(outcome, AuthOutcome::Failed(STORAGE_FAILURE_MESSAGE.into()));
    assert!(!session.is_logged_in());
}
