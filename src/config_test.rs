use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.contact_access_key, None);
    assert_eq!(cfg.forward, None);
}

#[test]
fn port_is_parsed_and_validated() {
    assert_eq!(config(&[("PORT", "8080")]).unwrap().port, 8080);
    assert_eq!(config(&[("PORT", "  ")]).unwrap().port, 3000);
    assert_eq!(
        config(&[("PORT", "eighty")]),
        Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() })
    );
}

#[test]
fn blank_access_key_means_unchecked() {
    assert_eq!(config(&[("CONTACT_ACCESS_KEY", " ")]).unwrap().contact_access_key, None);
    assert_eq!(config(&[("CONTACT_ACCESS_KEY", "k1")]).unwrap().contact_access_key.as_deref(), Some("k1"));
}

#[test]
fn forward_requires_its_access_key() {
    let err = config(&[("CONTACT_FORWARD_URL", "https://forms.example/submit")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { key: "CONTACT_FORWARD_ACCESS_KEY", .. }));

    let cfg = config(&[
        ("CONTACT_FORWARD_URL", "https://forms.example/submit"),
        ("CONTACT_FORWARD_ACCESS_KEY", "fwd"),
    ])
    .unwrap();
    assert_eq!(cfg.forward, Some(ContactEndpoint::new("https://forms.example/submit", "fwd")));
}

#[test]
fn forward_can_be_switched_off() {
    for off in ["0", "false", "NO", "off"] {
        let cfg = config(&[
            ("CONTACT_FORWARD_URL", "https://forms.example/submit"),
            ("CONTACT_FORWARD_ENABLED", off),
        ])
        .unwrap();
        assert_eq!(cfg.forward, None, "expected forwarding off for {off:?}");
    }
}

#[test]
fn forward_switch_rejects_garbage() {
    let err = config(&[("CONTACT_FORWARD_ENABLED", "maybe")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "CONTACT_FORWARD_ENABLED", .. }));
}

#[test]
fn parse_bool_variants() {
    for val in ["1", "true", "Yes", " ON "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "FALSE", "no", "off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
    assert_eq!(parse_bool(""), None);
}

