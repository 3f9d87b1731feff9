use super::*;
use serde_json::json;

fn ada() -> User {
    User(json!({ "id": "u1", "name": "Ada", "email": "ada@example.com" }))
}

#[test]
fn display_name_reads_name_member() {
    assert_eq!(ada().display_name(), Some("Ada"));
    assert_eq!(User(json!({ "id": 7 })).display_name(), None);
    assert_eq!(User(json!(null)).display_name(), None);
}

#[test]
fn init_on_empty_storage_has_no_user() {
    let store = SessionStore::init(MemoryStorage::default());
    assert!(!store.is_signed_in());
}

#[test]
fn sign_in_persists_under_user_key() {
    let mut store = SessionStore::init(MemoryStorage::default());
    store.sign_in(ada());
    assert_eq!(store.user(), Some(&ada()));

    let raw = store.storage().get(SESSION_KEY).unwrap();
    let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted["name"], "Ada");
}

#[test]
fn init_rehydrates_persisted_user() {
    let mut storage = MemoryStorage::default();
    storage.set(SESSION_KEY, &serde_json::to_string(&ada()).unwrap());
    let store = SessionStore::init(storage);
    assert_eq!(store.user().and_then(User::display_name), Some("Ada"));
}

#[test]
fn sign_out_clears_memory_and_storage() {
    let mut store = SessionStore::init(MemoryStorage::default());
    store.sign_in(ada());
    store.sign_out();
    assert!(store.user().is_none());
    assert!(store.storage().get(SESSION_KEY).is_none());
}

#[test]
fn corrupt_slot_is_discarded() {
    let mut storage = MemoryStorage::default();
    storage.set(SESSION_KEY, "{not json");
    let store = SessionStore::init(storage);
    assert!(store.user().is_none());
    assert!(store.storage().get(SESSION_KEY).is_none());
}

#[test]
fn null_slot_means_signed_out() {
    let mut storage = MemoryStorage::default();
    storage.set(SESSION_KEY, "null");
    let store = SessionStore::init(storage);
    assert!(!store.is_signed_in());
}

#[test]
fn other_keys_are_untouched() {
    let mut storage = MemoryStorage::default();
    storage.set("theme", "dark");
    let mut store = SessionStore::init(storage);
    store.sign_in(ada());
    store.sign_out();
    assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));
}

#[test]
fn null_user_signs_in_for_the_page_but_not_across_reloads() {
    let mut store = SessionStore::init(MemoryStorage::default());
    store.sign_in(User::default());
    assert!(store.is_signed_in());
    assert_eq!(store.storage().get(SESSION_KEY).as_deref(), Some("null"));

    let reloaded = SessionStore::init(store.storage().clone());
    assert!(!reloaded.is_signed_in());
}
