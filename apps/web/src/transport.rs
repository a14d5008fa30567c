//! reqwest-backed webhook transport for the contact form.

use async_trait::async_trait;
use reqwest::Client;
use site_core::{ContactSubmission, TransportError, WebhookTransport};
use url::Url;

/// Posts submissions to the fixed contact webhook through the browser
/// fetch backend. Requests run in `no-cors` mode: the response is opaque,
/// so a completed send is the only observable success signal. One request
/// per call, no retry, no explicit timeout.
#[derive(Clone)]
pub struct FetchWebhookTransport {
    client: Client,
    endpoint: String,
}

impl FetchWebhookTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl WebhookTransport for FetchWebhookTransport {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|err| TransportError::new(format!("invalid webhook endpoint: {err}")))?;
        let body = submission.encode()?;

        let request = self.client.post(endpoint).body(body);
        // no-cors is a fetch-level mode and only exists on the wasm backend.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_mode_no_cors();

        request
            .send()
            .await
            .map_err(|err| TransportError::new(format!("contact webhook request failed: {err}")))?;

        Ok(())
    }
}
