use std::fmt;

use reqwest::{multipart::Form, Client};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::RelayError;

/// Credentials and intent exactly as the caller sent them. Nothing is checked
/// locally; the auth service decides.
#[derive(Default, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("action", &self.action)
            .finish()
    }
}

/// The upstream's answer, relayed as-is.
#[derive(Debug)]
pub struct AuthReply {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct AuthRelay {
    client: Client,
    endpoint: String,
}

impl AuthRelay {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Posts the fields as multipart form data. Absent fields are left out.
    /// Any upstream status is a successful relay; only transport failures
    /// and non-JSON bodies are errors.
    pub async fn forward(&self, request: AuthRequest) -> Result<AuthReply, RelayError> {
        debug!(?request, "Relaying auth request");

        let AuthRequest {
            email,
            password,
            action,
        } = request;

        let mut form = Form::new();
        for (name, value) in [("email", email), ("password", password), ("action", action)] {
            if let Some(value) = value {
                form = form.text(name, value);
            }
        }

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await?;

        Ok(AuthReply { status, body })
    }
}
