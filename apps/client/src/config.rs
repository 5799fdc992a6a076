//! Client configuration from the environment.

use std::env;

/// Connection settings for the StudySync backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Bearer token issued by the session layer; optional so an
    /// unauthenticated client can still probe `/health`.
    pub token: Option<String>,
}

impl ClientConfig {
    /// Read `STUDYSYNC_API_URL` and `STUDYSYNC_TOKEN`. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Self {
        let base_url = env::var("STUDYSYNC_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let token = env::var("STUDYSYNC_TOKEN").ok().filter(|t| !t.is_empty());
        Self { base_url, token }
    }
}
