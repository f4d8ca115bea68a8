//! GitHub REST API client for latest-release lookups.
//!
//! Requests carry a bearer token when one is configured. The token only
//! lives in this process; it never reaches the browser.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use focusapp_core::release::{ReleaseOutcome, ReleaseRecord, ReleaseResolver, REASON_LOOKUP_FAILED};
use focusapp_core::repo::RepoId;
use reqwest::header::ACCEPT;

use crate::error::FetchError;

/// Public GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type GitHub recommends for REST requests.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Pinned REST API version.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub rejects requests without a `User-Agent`.
const USER_AGENT: &str = concat!("focusapp-site/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GitHubApi`].
#[derive(Clone)]
pub struct GitHubApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Bearer token attached to every request when set.
    pub token: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl fmt::Debug for GitHubApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubApiConfig")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for the GitHub releases endpoints.
#[derive(Debug, Clone)]
pub struct GitHubApi {
    client: reqwest::Client,
    config: GitHubApiConfig,
}

impl GitHubApi {
    /// Create a client with its own connection pool.
    pub fn new(config: GitHubApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    ///
    /// The client's own timeout and user agent apply.
    pub fn with_client(client: reqwest::Client, config: GitHubApiConfig) -> Self {
        Self { client, config }
    }

    /// Latest release of `repo`, body returned verbatim.
    ///
    /// The body is checked to be JSON but never decoded or re-encoded,
    /// whatever charset the upstream declares.
    pub async fn fetch_raw(&self, repo: &RepoId) -> Result<Bytes, FetchError> {
        let body = self.get_latest(repo).await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(body)
    }

    /// Latest release of `repo`, parsed.
    pub async fn fetch_latest_release(&self, repo: &RepoId) -> Result<ReleaseRecord, FetchError> {
        let body = self.get_latest(repo).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch and resolve the latest release in one step.
    ///
    /// Never fails: lookup errors are logged and reported as
    /// [`ReleaseOutcome::Unavailable`].
    pub async fn resolve_latest(&self, resolver: &ReleaseResolver) -> ReleaseOutcome {
        let repo = resolver.repo();
        match self.fetch_latest_release(repo).await {
            Ok(record) => {
                let outcome = resolver.resolve(&record);
                if let ReleaseOutcome::Unavailable(unavailable) = &outcome {
                    tracing::warn!(
                        %repo,
                        tag = %record.tag,
                        asset_count = record.assets.len(),
                        reason = %unavailable.reason,
                        "Latest release has no downloadable installer"
                    );
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(%repo, status = ?e.status_code(), error = %e, "Release lookup failed");
                resolver.unavailable(REASON_LOOKUP_FAILED)
            }
        }
    }

    // ---- private helpers ----

    async fn get_latest(&self, repo: &RepoId) -> Result<Bytes, FetchError> {
        let url = format!("{}{}", self.config.api_base, repo.latest_release_path());
        tracing::debug!(%repo, %url, "Fetching latest release");

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = FetchError::ensure_success(request.send().await?).await?;
        Ok(response.bytes().await?)
    }
}
