//! Where the contact form posts to.
//!
//! The contact endpoint and its access key are baked into the client at
//! build time (`WEBCRAFT_CONTACT_URL`, `WEBCRAFT_CONTACT_ACCESS_KEY`). The
//! default targets the site's own relay at `/api/contact`, which speaks the
//! same multipart format as the hosted form service.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::contact::{ContactField, ContactFormInput};

pub const DEFAULT_CONTACT_URL: &str = "/api/contact";

/// Multipart field carrying the access key.
pub const ACCESS_KEY_FIELD: &str = "access_key";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactEndpoint {
    pub url: String,
    pub access_key: String,
}

impl ContactEndpoint {
    pub fn new(url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self { url: url.into(), access_key: access_key.into() }
    }

    /// Endpoint fixed at compile time, falling back to the local relay.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("WEBCRAFT_CONTACT_URL").unwrap_or(DEFAULT_CONTACT_URL),
            option_env!("WEBCRAFT_CONTACT_ACCESS_KEY").unwrap_or_default(),
        )
    }
}

/// Ordered multipart fields for one contact submission.
#[must_use]
pub fn contact_form_fields<'a>(endpoint: &'a ContactEndpoint, input: &'a ContactFormInput) -> Vec<(&'static str, &'a str)> {
    let mut fields = vec![(ACCESS_KEY_FIELD, endpoint.access_key.as_str())];
    for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
        fields.push((field.as_str(), input.get(field)));
    }
    fields
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
