//! Shared HTTP transport for provider adapters.
//!
//! Every vendor API this crate talks to is a single JSON POST, so the
//! transport exposes exactly that. Non-success statuses are surfaced as a
//! typed failure with the response body attached; no retry is performed at
//! this layer. No timeout is imposed either — a deadline, if desired, is the
//! caller's to wrap around the parse call.

use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Other(String),
}

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body and parse the JSON response.
    ///
    /// `headers` are vendor-specific (e.g. `anthropic-version`); `bearer`
    /// sets an `Authorization: Bearer` header when the vendor authenticates
    /// that way.
    pub async fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        bearer: Option<&str>,
        body: &Value,
    ) -> Result<Value, TransportError> {
        let mut req = self.client.post(url).json(body);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "provider response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}
