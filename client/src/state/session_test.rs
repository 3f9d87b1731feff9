use super::*;
use serde_json::json;

#[test]
fn default_session_is_signed_out() {
    let session = Session::default();
    assert!(!session.is_signed_in());
}

#[test]
fn nav_label_prefers_user_name() {
    let user = User(json!({ "name": "Ada" }));
    assert_eq!(nav_label(Some(&user)), "Ada");
}

#[test]
fn nav_label_falls_back_for_nameless_user() {
    let user = User(json!({ "id": "u1" }));
    assert_eq!(nav_label(Some(&user)), "Profile");
}

#[test]
fn nav_label_signed_out() {
    assert_eq!(nav_label(None), "Sign In");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_in_off_browser_only_updates_memory() {
    let mut session = Session::init(BrowserStorage);
    session.sign_in(User(json!({ "name": "Ada" })));
    assert!(session.is_signed_in());
    assert!(Session::init(BrowserStorage).user().is_none());
}
