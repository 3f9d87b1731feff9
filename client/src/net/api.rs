//! Browser submitters for the contact and auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs failing with a transport error, since forms are
//! only ever submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into a `SubmitError` and recovered by the form's
//! status region; nothing here panics or propagates further.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::auth::AuthInput;
use forms::contact::ContactFormInput;
use forms::endpoint::ContactEndpoint;
use forms::session::User;
use forms::{SubmitError, Submitter};

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available on server";

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> SubmitError {
    log::warn!("form request failed: {err}");
    SubmitError::transport(err)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> SubmitError {
    transport(format!("{err:?}"))
}

/// Posts the contact form as multipart `FormData`.
#[derive(Clone, Debug)]
pub struct GlooContactSubmitter {
    endpoint: ContactEndpoint,
}

impl GlooContactSubmitter {
    #[must_use]
    pub fn new(endpoint: ContactEndpoint) -> Self {
        Self { endpoint }
    }
}

impl Default for GlooContactSubmitter {
    fn default() -> Self {
        Self::new(ContactEndpoint::from_build_env())
    }
}

#[async_trait::async_trait(?Send)]
impl Submitter<ContactFormInput> for GlooContactSubmitter {
    type Output = ();

    async fn submit(&self, input: &ContactFormInput) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            use forms::endpoint::contact_form_fields;
            use forms::submit::{interpret_contact_reply, parse_reply};

            let body = web_sys::FormData::new().map_err(js_error)?;
            for (name, value) in contact_form_fields(&self.endpoint, input) {
                body.append_with_str(name, value).map_err(js_error)?;
            }
            let resp = gloo_net::http::Request::post(&self.endpoint.url)
                .body(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let ok = resp.ok();
            let raw = resp.text().await.map_err(transport)?;
            interpret_contact_reply(ok, parse_reply(&raw)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.endpoint, input);
            Err(SubmitError::transport(NOT_IN_BROWSER))
        }
    }
}

/// Posts sign-in / sign-up requests as JSON to the same origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooAuthSubmitter;

#[async_trait::async_trait(?Send)]
impl Submitter<AuthInput> for GlooAuthSubmitter {
    type Output = User;

    async fn submit(&self, input: &AuthInput) -> Result<User, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            use forms::submit::{interpret_auth_reply, parse_reply};

            let resp = gloo_net::http::Request::post(input.endpoint())
                .json(input)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let ok = resp.ok();
            let raw = resp.text().await.map_err(transport)?;
            interpret_auth_reply(ok, parse_reply(&raw)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(SubmitError::transport(NOT_IN_BROWSER))
        }
    }
}
