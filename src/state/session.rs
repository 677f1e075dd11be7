//! Persisted auth session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided to the component tree as `RwSignal<SessionStore>`. The route guard
//! reads it on every navigation; the login and home pages write it.
//!
//! INVARIANTS
//! ==========
//! - The in-memory token and the durable entry are updated together.
//! - An empty token is never held; it is normalized to `None`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use super::storage::TokenStorage;
use crate::config::DEFAULT_STORAGE_KEY;

#[derive(Clone)]
pub struct SessionStore {
    token: Option<String>,
    key: String,
    storage: Arc<dyn TokenStorage>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open a store under the default `"token"` key.
    pub fn load(storage: Arc<dyn TokenStorage>) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Open a store, reading the durable entry exactly once.
    pub fn load_with_key(storage: Arc<dyn TokenStorage>, key: &str) -> Self {
        let token = normalize(storage.get(key));
        log::debug!("session loaded (authenticated: {})", token.is_some());
        Self { token, key: key.to_owned(), storage }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the token and mirror it to durable storage.
    ///
    /// `None` (or an empty string) removes the durable entry.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = normalize(token);
        match &self.token {
            Some(token) => self.storage.set(&self.key, token),
            None => self.storage.remove(&self.key),
        }
        log::debug!("session token {}", if self.token.is_some() { "stored" } else { "cleared" });
    }

    pub fn logout(&mut self) {
        self.set_token(None);
    }
}

fn normalize(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}
