//! Transport between the form controller and the contact endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::client::error::ClientError;

/// `User-Agent` sent by [`HttpContactTransport`].
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request timeout of [`HttpContactTransport`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one contact request and returns the decoded response envelope.
///
/// Implementations return `Ok` for every response carrying the
/// `{success, message}` envelope, whatever its HTTP status; the controller
/// decides from `success`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, ClientError>;
}

/// [`ContactTransport`] posting JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    /// Creates a transport posting to `endpoint`, e.g.
    /// `https://example.com/process_contact`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Creates a transport around an existing client.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%status, endpoint = %self.endpoint, "Contact endpoint responded");

        response
            .json::<ContactResponse>()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("{status}: {e}")))
    }
}
