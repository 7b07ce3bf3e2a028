//! Hosted mirror client.
//!
//! The file-backed store is authoritative; a hosted relational backend
//! is an optional, external collaborator reached over HTTP. This
//! client is push-only: `lifeos snapshot push` uploads the current
//! snapshot, and nothing on the read path ever consults the remote.

use serde::Deserialize;

use crate::config::{remote_key, remote_url};
use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// Push-only client for the hosted mirror.
pub struct RemoteClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Mirror response for an import push.
#[derive(Debug, Deserialize)]
struct ImportResponse {
    success: bool,
}

impl RemoteClient {
    /// Build a client from `LIFEOS_REMOTE_URL` / `LIFEOS_REMOTE_KEY`.
    ///
    /// Returns `None` when no remote is configured; callers treat
    /// that as "mirroring disabled", not an error.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        remote_url().map(|base_url| Self::new(base_url, remote_key()))
    }

    /// Build a client against an explicit base URL.
    #[must_use]
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// The mirror's import endpoint.
    #[must_use]
    pub fn import_url(&self) -> String {
        format!("{}/api/import", self.base_url)
    }

    /// Upload a snapshot to the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] if the request fails, the mirror
    /// answers with a non-success status, or it reports
    /// `{"success": false}`.
    pub async fn push_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let mut request = self.client.post(self.import_url()).json(snapshot);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Remote(format!("push failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote(format!(
                "mirror rejected snapshot ({status}): {body}"
            )));
        }

        let data: ImportResponse = response
            .json()
            .await
            .map_err(|e| Error::Remote(format!("unreadable mirror response: {e}")))?;

        if !data.success {
            return Err(Error::Remote("mirror reported import failure".to_string()));
        }

        Ok(())
    }
}
