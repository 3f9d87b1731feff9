//! Native submitters over reqwest.
//!
//! Browser builds post through gloo-net instead; these are for the server's
//! contact relay and for anything else running outside a browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::multipart;

use crate::auth::AuthInput;
use crate::contact::ContactFormInput;
use crate::endpoint::{ContactEndpoint, contact_form_fields, join_url};
use crate::error::SubmitError;
use crate::session::User;
use crate::submit::{AuthReply, ContactReply, Submitter, interpret_auth_reply, interpret_contact_reply, parse_reply};

/// Posts contact messages as multipart form data.
#[derive(Clone, Debug)]
pub struct HttpContactSubmitter {
    client: reqwest::Client,
    endpoint: ContactEndpoint,
}

impl HttpContactSubmitter {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: ContactEndpoint) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &ContactEndpoint {
        &self.endpoint
    }

    /// Post one message and interpret the reply.
    ///
    /// The returned future is `Send`, unlike the [`Submitter`] impl, so a
    /// request handler can await it.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the request fails or the service
    /// declines the message.
    pub async fn send(&self, input: &ContactFormInput) -> Result<(), SubmitError> {
        let form = contact_form_fields(&self.endpoint, input)
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| form.text(name, value.to_owned()));

        let resp = self
            .client
            .post(&self.endpoint.url)
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::transport)?;
        let ok = resp.status().is_success();
        let raw = resp.text().await.map_err(SubmitError::transport)?;
        let reply: ContactReply = parse_reply(&raw)?;
        tracing::debug!(status = ok, success = reply.success, "contact endpoint replied");
        interpret_contact_reply(ok, reply)
    }
}

#[async_trait::async_trait(?Send)]
impl Submitter<ContactFormInput> for HttpContactSubmitter {
    type Output = ();

    async fn submit(&self, input: &ContactFormInput) -> Result<(), SubmitError> {
        self.send(input).await
    }
}

/// Posts sign-in / sign-up requests as JSON against an app base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthSubmitter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthSubmitter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl Submitter<AuthInput> for HttpAuthSubmitter {
    type Output = User;

    async fn submit(&self, input: &AuthInput) -> Result<User, SubmitError> {
        let url = join_url(&self.base_url, input.endpoint());
        let resp = self
            .client
            .post(url)
            .json(input)
            .send()
            .await
            .map_err(SubmitError::transport)?;
        let ok = resp.status().is_success();
        let raw = resp.text().await.map_err(SubmitError::transport)?;
        let reply: AuthReply = parse_reply(&raw)?;
        interpret_auth_reply(ok, reply)
    }
}
