//! Session presence derived from the persisted access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and logout own the token; this module only reads it. Nothing is
//! cached, so a token written or cleared elsewhere is seen on the very next
//! navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::GateConfig;
use crate::gate::SessionProvider;
use crate::util::storage::KeyValueStore;

/// [`SessionProvider`] backed by a token stored under a fixed key.
#[derive(Clone, Debug)]
pub struct StoredTokenSession<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoredTokenSession<S> {
    pub fn new(store: S, config: &GateConfig) -> Self {
        Self { store, key: config.token_key.clone() }
    }

    /// The stored token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.key).filter(|token| !token.trim().is_empty())
    }
}

impl<S: KeyValueStore> SessionProvider for StoredTokenSession<S> {
    fn session_present(&self) -> bool {
        self.token().is_some()
    }
}
