//! Alias endpoint client

use super::{AliasRequest, SubmitError, interpret_response};
use std::time::Duration;
use tracing::{debug, warn};

/// Something that turns a name/email pair into an alias
pub trait AliasService: Send + Sync {
    fn request_alias(&self, request: &AliasRequest) -> Result<String, SubmitError>;
}

/// Blocking HTTP client for the alias endpoint
pub struct HttpAliasClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpAliasClient {
    /// Create a client for `endpoint`. `timeout` bounds the whole request;
    /// `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        // Non-2xx responses carry an `{error}` body we need to read
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AliasService for HttpAliasClient {
    fn request_alias(&self, request: &AliasRequest) -> Result<String, SubmitError> {
        debug!(endpoint = %self.endpoint, "Requesting alias");

        let mut response = self
            .agent
            .post(&self.endpoint)
            .send_json(request)
            .map_err(|e| {
                warn!("Alias request failed: {}", e);
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        debug!(status, "Alias endpoint responded");
        interpret_response(status, &body)
    }
}
