//! Server configuration from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Unset optional variables fall back to defaults. Set-but-invalid values are
//! reported as [`ConfigError`] so a typo never silently changes behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use forms::endpoint::ContactEndpoint;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} is required when {because} is set")]
    Missing { key: &'static str, because: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Key the relay requires in the `access_key` field; `None` accepts any.
    pub contact_access_key: Option<String>,
    /// Third-party form service the relay forwards to.
    pub forward: Option<ContactEndpoint>,
}

impl ServerConfig {
    /// Read `PORT`, `CONTACT_ACCESS_KEY`, `CONTACT_FORWARD_URL`,
    /// `CONTACT_FORWARD_ACCESS_KEY` and `CONTACT_FORWARD_ENABLED`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a malformed port or switch, or a forward
    /// URL without its access key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let forward_enabled = match non_blank("CONTACT_FORWARD_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "CONTACT_FORWARD_ENABLED", value: raw })?,
            None => true,
        };

        let forward = match non_blank("CONTACT_FORWARD_URL") {
            Some(url) if forward_enabled => {
                let key = non_blank("CONTACT_FORWARD_ACCESS_KEY").ok_or(ConfigError::Missing {
                    key: "CONTACT_FORWARD_ACCESS_KEY",
                    because: "CONTACT_FORWARD_URL",
                })?;
                Some(ContactEndpoint::new(url, key))
            }
            _ => None,
        };

        Ok(Self { port, contact_access_key: non_blank("CONTACT_ACCESS_KEY"), forward })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
