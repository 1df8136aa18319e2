//! Session token persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store is the single owner of the persisted session token. Guards,
//! the header, and the REST helpers only read through `get`/`has`/`auth_header`
//! and write through `set`/`clear`.
//!
//! ERROR HANDLING
//! ==============
//! Storage can be missing (native builds), disabled by the browser, or reject
//! writes (quota, private mode). Every operation degrades to "no token" or
//! `false` instead of panicking, so consumers simply behave as logged out.
//!
//! TRADE-OFFS
//! ==========
//! Storage is shared by every tab of the origin and has no locking; last
//! writer wins. Each call reads a fresh snapshot.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "authToken";

/// Failure reported by a storage backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// Minimal key-value surface the token store needs.
pub trait StorageBackend: Send + Sync {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be reached or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when storage cannot be reached or refuses the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Always unavailable outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_rejection(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| js_rejection(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_rejection(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_rejection(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage. Clones share the same map, which lets tests model
/// several tabs of one origin.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            items: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle availability; while disabled every call fails with `Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// Accessor for the persisted session token.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").field("key", &TOKEN_KEY).finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Token store over `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// The persisted token, or `None` if absent, empty, or unreadable.
    pub fn get(&self) -> Option<String> {
        match self.backend.get_item(TOKEN_KEY) {
            Ok(value) => value.filter(|token| !token.is_empty()),
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                leptos::logging::warn!("token read failed: {e}");
                None
            }
        }
    }

    /// Persist `token`, or remove it when `None` or empty.
    ///
    /// Returns whether the write completed.
    pub fn set(&self, token: Option<&str>) -> bool {
        let result = match token {
            Some(token) if !token.is_empty() => self.backend.set_item(TOKEN_KEY, token),
            _ => self.backend.remove_item(TOKEN_KEY),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("token write failed: {e}");
                false
            }
        }
    }

    /// Remove the token. Equivalent to `set(None)`.
    pub fn clear(&self) -> bool {
        self.set(None)
    }

    pub fn has(&self) -> bool {
        self.get().is_some()
    }

    /// `Authorization: Bearer <token>` when a token is present, else empty.
    pub fn auth_header(&self) -> HashMap<&'static str, String> {
        let mut headers = HashMap::new();
        if let Some(token) = self.get() {
            headers.insert("Authorization", format!("Bearer {token}"));
        }
        headers
    }
}
