use super::*;

#[test]
fn form_fields_start_with_access_key_then_contact_fields() {
    let endpoint = ContactEndpoint::new("https://forms.example/submit", "k-123");
    let input = ContactFormInput {
        name: "Jo".to_owned(),
        email: "a@b.com".to_owned(),
        subject: "Hi!".to_owned(),
        message: "This is ten+".to_owned(),
    };
    assert_eq!(
        contact_form_fields(&endpoint, &input),
        vec![
            ("access_key", "k-123"),
            ("name", "Jo"),
            ("email", "a@b.com"),
            ("subject", "Hi!"),
            ("message", "This is ten+"),
        ]
    );
}

#[test]
fn build_env_endpoint_has_a_url() {
    assert!(!ContactEndpoint::from_build_env().url.is_empty());
}

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://127.0.0.1:3000/", "/api/auth/signin"), "http://127.0.0.1:3000/api/auth/signin");
    assert_eq!(join_url("http://h", "api/x"), "http://h/api/x");
}
