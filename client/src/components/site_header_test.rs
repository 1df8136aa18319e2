use super::*;
use crate::util::token_store::{MemoryStorage, TokenStore};

// =============================================================
// nav_links
// =============================================================

#[test]
fn logged_out_shows_login_and_signup_only() {
    let labels: Vec<&str> = nav_links(SessionStatus::LoggedOut).iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["Login", "Sign up"]);
}

#[test]
fn logged_in_shows_admin_navigation_and_profile() {
    let links = nav_links(SessionStatus::LoggedIn);
    assert!(links.iter().any(|l| l.href == "/profile"));
    assert!(links.iter().any(|l| l.href == "/ai-quiz"));
    assert!(!links.iter().any(|l| l.href == "/login"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token_and_targets_login() {
    let session = SessionStore::new(TokenStore::new(MemoryStorage::new()));
    session.sign_in("tok");
    assert_eq!(logout(&session), "/login");
    assert!(!session.is_logged_in());
}

#[test]
fn cross_tab_logout_flips_other_tab_status() {
    let origin = MemoryStorage::new();
    let tab_a = SessionStore::new(TokenStore::new(origin.clone()));
    let tab_b = SessionStore::new(TokenStore::new(origin));
    tab_a.sign_in("tok");
    assert_eq!(tab_b.status(), SessionStatus::LoggedIn);

    logout(&tab_a);
    assert_eq!(tab_b.handle_storage_event(Some("authToken")), Some(SessionStatus::LoggedOut));
}
