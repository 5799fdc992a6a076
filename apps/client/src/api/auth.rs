//! Session endpoints. OAuth redirect handling is out of scope; the
//! bearer token is supplied by the surrounding session layer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Acknowledgement, ApiClient, ApiError};

/// The authenticated user's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub has_calendar_access: bool,
}

impl ApiClient {
    /// Fetch the profile behind the configured token.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let request = self.authed(|c, url| c.get(url), "/api/auth/me")?;
        self.send_json(request).await
    }

    /// Invalidate the current token server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.authed(|c, url| c.post(url), "/api/auth/logout")?;
        let _: Acknowledgement = self.send_json(request).await?;
        Ok(())
    }
}
