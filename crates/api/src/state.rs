use std::sync::Arc;
use std::time::Duration;

use focusapp_core::release::ReleaseResolver;
use focusapp_upstream::github::GitHubApi;
use focusapp_upstream::tierlist::TierlistClient;
use focusapp_upstream::FetchError;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// GitHub releases client (shares one connection pool).
    pub github: GitHubApi,
    /// Installer selection for the configured repository.
    pub resolver: Arc<ReleaseResolver>,
    /// Tierlist feed client, absent when no feed is configured.
    pub tierlist: Option<TierlistClient>,
}

impl AppState {
    /// Build the upstream clients described by `config`.
    pub fn from_config(config: ServerConfig) -> Result<Self, FetchError> {
        let github = GitHubApi::new(config.github_api_config())?;

        let tierlist = match &config.tierlist_url {
            Some(url) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.upstream_timeout_secs))
                    .build()?;
                Some(TierlistClient::with_client(client, url.clone()))
            }
            None => None,
        };

        let resolver = ReleaseResolver::new(config.github_repo.clone())
            .with_matcher(config.asset_matcher());

        Ok(Self {
            config: Arc::new(config),
            github,
            resolver: Arc::new(resolver),
            tierlist,
        })
    }
}
