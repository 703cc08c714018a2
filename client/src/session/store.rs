//! Key-value storage for the session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the bearer token and display name into browser
//! `localStorage`; the landing page reads them back on mount and purges them
//! when the server rejects the token. Access goes through [`SessionStore`] so
//! the validator can run against an in-memory store in tests and during SSR.
//!
//! TRADE-OFFS
//! ==========
//! Storage is unlocked and last-writer-wins. Only one logical session exists
//! per browser profile, so concurrent tabs overwriting each other is accepted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the display username.
pub const USERNAME_KEY: &str = "username";

/// Minimal key-value capability backing the session credential.
pub trait SessionStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Bearer credential plus the display name saved alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub username: Option<String>,
}

/// Load the stored credential. A missing or blank token yields `None`.
pub fn load_credential(store: &impl SessionStore) -> Option<Credential> {
    let token = store.get(TOKEN_KEY)?;
    if token.trim().is_empty() {
        return None;
    }
    let username = store.get(USERNAME_KEY).filter(|name| !name.trim().is_empty());
    Some(Credential { token, username })
}

/// Persist a credential. A credential without a username clears any stale one.
pub fn save_credential(store: &impl SessionStore, credential: &Credential) {
    store.set(TOKEN_KEY, &credential.token);
    match &credential.username {
        Some(name) => store.set(USERNAME_KEY, name),
        None => store.remove(USERNAME_KEY),
    }
}

/// Remove both the token and the username.
pub fn clear_credential(store: &impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USERNAME_KEY);
}

/// `localStorage`-backed store. Reads are empty and writes are dropped
/// outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store for tests. Server rendering never touches storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_entries<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in pairs {
            store.set(key, value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
