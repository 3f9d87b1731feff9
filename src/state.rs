//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup: the loaded configuration plus, when forwarding is
//! configured, the outbound contact submitter.

use std::sync::Arc;

use forms::http::HttpContactSubmitter;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub forwarder: Option<HttpContactSubmitter>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let forwarder = config
            .forward
            .clone()
            .map(|endpoint| HttpContactSubmitter::new(reqwest::Client::new(), endpoint));
        Self { config: Arc::new(config), forwarder }
    }
}
