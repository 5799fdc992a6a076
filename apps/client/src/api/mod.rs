//! Typed client for the StudySync backend API.
//!
//! Every call is a single request/response exchange: it fully succeeds
//! with a complete payload or fails with an [`ApiError`]. Nothing here
//! retries; the backend is the source of truth and failures are
//! surfaced for a human decision.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub mod auth;
pub mod courses;
pub mod events;
pub mod flashcards;
pub mod notes;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not authenticated - no API token configured")]
    NotAuthenticated,
}

/// Plain acknowledgement body returned by delete endpoints.
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// HTTP client for the StudySync backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`, unauthenticated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the bearer credential issued by the session layer.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the backend is reachable.
    pub async fn check_connectivity(&self) -> Result<bool, ApiError> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start an authenticated request; all endpoints except `/health`
    /// require the bearer token.
    pub(crate) fn authed(
        &self,
        build: impl FnOnce(&Client, String) -> RequestBuilder,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(build(&self.client, self.url(path)).bearer_auth(token))
    }

    /// Send a request and decode the JSON body, mapping non-2xx
    /// responses to [`ApiError::Backend`] with the server's message.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Backend { status, message });
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}
