//! Upstream relays: the only code that talks to the external auth and
//! job-matching services. One outbound call per incoming request; failures
//! are surfaced immediately, never retried.

use reqwest::Client;
use thiserror::Error;

pub mod auth;
pub mod handlers;
pub mod jobs;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream unreachable or the exchange broke off mid-flight.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid JSON from upstream: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shared outbound client. No timeout beyond the transport defaults.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
