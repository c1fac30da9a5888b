use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::storage::MemoryStore;

/// Store whose contents can change between reads, like `localStorage`.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryStore>>);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }
}

#[test]
fn token_present_means_session_present() {
    let store = MemoryStore::new().with("access_token", "abc123");
    let session = StoredTokenSession::new(store, &GateConfig::default());
    assert!(session.session_present());
    assert_eq!(session.token().as_deref(), Some("abc123"));
}

#[test]
fn absent_token_means_signed_out() {
    let session = StoredTokenSession::new(MemoryStore::new(), &GateConfig::default());
    assert!(!session.session_present());
}

#[test]
fn blank_token_means_signed_out() {
    let store = MemoryStore::new().with("access_token", "  ");
    let session = StoredTokenSession::new(store, &GateConfig::default());
    assert!(!session.session_present());
}

#[test]
fn reads_the_configured_key() {
    let config = GateConfig { token_key: "jwt".to_owned(), ..GateConfig::default() };
    let store = MemoryStore::new().with("access_token", "abc123");
    assert!(!StoredTokenSession::new(store.clone(), &config).session_present());
    assert!(StoredTokenSession::new(store.with("jwt", "abc123"), &config).session_present());
}

#[test]
fn every_check_rereads_storage() {
    let store = SharedStore::default();
    let session = StoredTokenSession::new(store.clone(), &GateConfig::default());
    assert!(!session.session_present());

    store.0.borrow_mut().set("access_token", "abc123");
    assert!(session.session_present());

    store.0.borrow_mut().remove("access_token");
    assert!(!session.session_present());
}
