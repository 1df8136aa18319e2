//! Session state shared by route guards, the header, and auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Token presence in `TokenStore` is the only source of truth for "logged in".
//! `SessionStore` wraps the token store with a small publish/subscribe layer so
//! every same-tab write notifies subscribers synchronously. Writes from other
//! tabs arrive as window `storage` events and are fed in through
//! `handle_storage_event`, which re-reads storage and notifies the same way.
//!
//! The store is provided through Leptos context alongside a
//! `RwSignal<SessionStatus>` mirror that the app keeps current with a
//! subscription.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::util::token_store::{TOKEN_KEY, TokenStore};

/// Whether a session token is present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionStatus {
    pub fn from_presence(has_token: bool) -> Self {
        if has_token { Self::LoggedIn } else { Self::LoggedOut }
    }

    pub fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// Handle returned by `SessionStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(SessionStatus) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Token store plus same-tab change notifications.
#[derive(Clone)]
pub struct SessionStore {
    tokens: TokenStore,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("tokens", &self.tokens)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

/// True when a storage event for `key` can change the session.
///
/// A `None` key means the whole origin storage was cleared.
pub fn storage_event_touches_session(key: Option<&str>) -> bool {
    key.map_or(true, |k| k == TOKEN_KEY)
}

impl SessionStore {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens, subscribers: Arc::default() }
    }

    /// Session store over `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(TokenStore::browser())
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Current status, read fresh from storage.
    pub fn status(&self) -> SessionStatus {
        SessionStatus::from_presence(self.tokens.has())
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.has()
    }

    /// Persist `token` and notify subscribers. Returns whether the write completed.
    pub fn sign_in(&self, token: &str) -> bool {
        let stored = self.tokens.set(Some(token));
        self.notify();
        stored
    }

    /// Remove the token and notify subscribers. Returns whether the removal completed.
    pub fn sign_out(&self) -> bool {
        let cleared = self.tokens.clear();
        self.notify();
        cleared
    }

    /// Re-read storage after a cross-tab `storage` event.
    ///
    /// Returns the recomputed status when `key` concerns the session, `None`
    /// for unrelated keys.
    pub fn handle_storage_event(&self, key: Option<&str>) -> Option<SessionStatus> {
        if !storage_event_touches_session(key) {
            return None;
        }
        Some(self.notify())
    }

    /// Register `listener`; it runs synchronously after every session change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(SessionStatus) + Send + Sync + 'static,
    {
        let mut subs = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subs.next_id += 1;
        let id = SubscriptionId(subs.next_id);
        subs.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = subs.listeners.len();
        subs.listeners.retain(|(sid, _)| *sid != id);
        subs.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }

    fn notify(&self) -> SessionStatus {
        let status = self.status();
        // Snapshot first so listeners may call back into the store.
        let listeners: Vec<Listener> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(status);
        }
        status
    }
}
