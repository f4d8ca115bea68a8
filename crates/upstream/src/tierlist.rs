//! Stats provider client for the tierlist widget.

use focusapp_core::tierlist::{Role, TierlistOutcome, TierlistPayload};

use crate::error::FetchError;

/// HTTP client for a tierlist feed at a fixed URL.
#[derive(Debug, Clone)]
pub struct TierlistClient {
    client: reqwest::Client,
    url: String,
}

impl TierlistClient {
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the whole feed.
    pub async fn fetch(&self) -> Result<TierlistPayload, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let body = FetchError::ensure_success(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Tierlist for `role`, falling back to sample data.
///
/// `client` is `None` when no feed is configured; that also yields a
/// degraded outcome.
pub async fn tierlist_for(
    client: Option<&TierlistClient>,
    role: Role,
    cdn_version: &str,
) -> TierlistOutcome {
    let Some(client) = client else {
        return TierlistOutcome::degraded(role, "no tierlist feed configured", cdn_version);
    };

    match client.fetch().await {
        Ok(payload) => {
            let outcome = TierlistOutcome::from_payload(&payload, role, cdn_version);
            if !outcome.is_live() {
                tracing::warn!(%role, url = %client.url(), "Tierlist feed has no entries for role");
            }
            outcome
        }
        Err(e) => {
            tracing::warn!(%role, url = %client.url(), error = %e, "Tierlist fetch failed, serving sample data");
            TierlistOutcome::degraded(role, "tierlist feed unavailable", cdn_version)
        }
    }
}
