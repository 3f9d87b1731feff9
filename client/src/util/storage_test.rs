#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_off_browser() {
    assert_eq!(BrowserStorage.get("user"), None);
}

#[test]
fn writes_are_noops_off_browser() {
    let mut storage = BrowserStorage;
    storage.set("user", "{}");
    storage.remove("user");
    assert_eq!(storage.get("user"), None);
}
