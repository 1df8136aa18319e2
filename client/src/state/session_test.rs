use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::util::token_store::MemoryStorage;

fn recorder(session: &SessionStore) -> (Arc<Mutex<Vec<SessionStatus>>>, SubscriptionId) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = session.subscribe(move |s| sink.lock().unwrap().push(s));
    (seen, id)
}

// =============================================================
// SessionStatus
// =============================================================

#[test]
fn status_default_is_logged_out() {
    assert_eq!(SessionStatus::default(), SessionStatus::LoggedOut);
}

#[test]
fn status_from_presence() {
    assert_eq!(SessionStatus::from_presence(true), SessionStatus::LoggedIn);
    assert_eq!(SessionStatus::from_presence(false), SessionStatus::LoggedOut);
    assert!(SessionStatus::LoggedIn.is_logged_in());
    assert!(!SessionStatus::LoggedOut.is_logged_in());
}

// =============================================================
// Same-tab notifications
// =============================================================

#[test]
fn sign_in_persists_and_notifies() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    let (seen, _) = recorder(&session);

    assert!(session.sign_in("tok"));
    assert!(session.is_logged_in());
    assert_eq!(session.tokens().get().as_deref(), Some("tok"));
    assert_eq!(*seen.lock().unwrap(), vec![SessionStatus::LoggedIn]);
}

#[test]
fn sign_out_clears_and_notifies() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    session.sign_in("tok");
    let (seen, _) = recorder(&session);

    assert!(session.sign_out());
    assert!(!session.is_logged_in());
    assert_eq!(*seen.lock().unwrap(), vec![SessionStatus::LoggedOut]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    let (seen, id) = recorder(&session);
    assert_eq!(session.subscriber_count(), 1);

    assert!(session.unsubscribe(id));
    assert!(!session.unsubscribe(id));
    session.sign_in("tok");
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(session.subscriber_count(), 0);
}

#[test]
fn listener_may_read_store_during_notification() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    let reader = session.clone();
    let agreed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&agreed);
    session.subscribe(move |status| {
        if reader.status() == status {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    session.sign_in("tok");
    session.sign_out();
    assert_eq!(agreed.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_write_still_notifies_current_truth() {
    let storage = MemoryStorage::new();
    let session = SessionStore::new(TokenStore::new(storage.clone()));
    let (seen, _) = recorder(&session);
    storage.set_available(false);

    assert!(!session.sign_in("tok"));
    assert_eq!(*seen.lock().unwrap(), vec![SessionStatus::LoggedOut]);
}

// =============================================================
// Cross-tab storage events
// =============================================================

#[test]
fn storage_event_key_matching() {
    assert!(storage_event_touches_session(Some("authToken")));
    assert!(storage_event_touches_session(None));
    assert!(!storage_event_touches_session(Some("theme")));
}

#[test]
fn other_tab_logout_reaches_this_tab_via_storage_event() {
    let origin = MemoryStorage::new();
    let tab_a = SessionStore::new(TokenStore::new(origin.clone()));
    let tab_b = SessionStore::new(TokenStore::new(origin));
    tab_a.sign_in("tok");

    let (seen_b, _) = recorder(&tab_b);
    assert_eq!(tab_b.status(), SessionStatus::LoggedIn);

    tab_a.sign_out();
    // Tab B hears nothing until the browser delivers the storage event.
    assert!(seen_b.lock().unwrap().is_empty());

    assert_eq!(tab_b.handle_storage_event(Some(TOKEN_KEY)), Some(SessionStatus::LoggedOut));
    assert_eq!(*seen_b.lock().unwrap(), vec![SessionStatus::LoggedOut]);
}

#[test]
fn unrelated_storage_event_is_ignored() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    let (seen, _) = recorder(&session);
    assert_eq!(session.handle_storage_event(Some("other")), None);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn repeated_storage_events_are_idempotent() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    session.sign_in("tok");
    let (seen, _) = recorder(&session);
    session.handle_storage_event(None);
    session.handle_storage_event(None);
    assert_eq!(*seen.lock().unwrap(), vec![SessionStatus::LoggedIn, SessionStatus::LoggedIn]);
}
