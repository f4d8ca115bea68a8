use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use focusapp_core::error::CoreError;
use focusapp_core::release::AssetMatcher;
use focusapp_core::repo::{RepoId, DEFAULT_REPO};
use focusapp_upstream::github::{GitHubApiConfig, DEFAULT_API_BASE};

/// Default icon CDN data version used for tierlist icons.
pub const DEFAULT_ICON_CDN_VERSION: &str = "14.1.1";

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("GITHUB_REPO is invalid: {0}")]
    Repo(#[from] CoreError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The GitHub token
/// is optional; unauthenticated requests work but are rate limited harder.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Repository whose latest release is published.
    pub github_repo: RepoId,
    /// Bearer token for the GitHub API. Never sent to browsers.
    pub github_token: Option<String>,
    /// GitHub REST API base URL.
    pub github_api_url: String,
    /// Timeout for a single upstream request in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
    /// Extra marker that also identifies the installer asset.
    pub asset_marker: Option<String>,
    /// Tierlist feed URL; sample data is served when unset.
    pub tierlist_url: Option<String>,
    /// Icon CDN data version.
    pub icon_cdn_version: String,
    /// Directory with the static landing page, served as fallback.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `GITHUB_REPO`           | `mhommet/FocusAPP`         |
    /// | `GITHUB_TOKEN`          | unset                      |
    /// | `GITHUB_API_URL`        | `https://api.github.com`   |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                       |
    /// | `ASSET_MARKER`          | unset                      |
    /// | `TIERLIST_URL`          | unset                      |
    /// | `ICON_CDN_VERSION`      | `14.1.1`                   |
    /// | `STATIC_DIR`            | unset                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or("PORT", var("PORT"), 3000u16, "a valid port number")?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::InvalidValue {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    expected: "a comma-separated list of origins",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS"),
            30u64,
            "a whole number of seconds",
        )?;

        let github_repo = RepoId::parse(&var("GITHUB_REPO").unwrap_or_else(|| DEFAULT_REPO.into()))?;

        let github_api_url = var("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE.into())
            .trim_end_matches('/')
            .to_string();

        let upstream_timeout_secs = parse_or(
            "UPSTREAM_TIMEOUT_SECS",
            var("UPSTREAM_TIMEOUT_SECS"),
            10u64,
            "a whole number of seconds",
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            github_repo,
            github_token: var("GITHUB_TOKEN"),
            github_api_url,
            upstream_timeout_secs,
            asset_marker: var("ASSET_MARKER"),
            tierlist_url: var("TIERLIST_URL"),
            icon_cdn_version: var("ICON_CDN_VERSION")
                .unwrap_or_else(|| DEFAULT_ICON_CDN_VERSION.into()),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }

    /// Installer selection rule: suffix-only unless a marker is configured.
    pub fn asset_matcher(&self) -> AssetMatcher {
        match &self.asset_marker {
            Some(marker) => AssetMatcher::SuffixOrMarker(marker.clone()),
            None => AssetMatcher::SuffixOnly,
        }
    }

    pub fn github_api_config(&self) -> GitHubApiConfig {
        GitHubApiConfig {
            api_base: self.github_api_url.clone(),
            token: self.github_token.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("github_repo", &self.github_repo)
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("github_api_url", &self.github_api_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("asset_marker", &self.asset_marker)
            .field("tierlist_url", &self.tierlist_url)
            .field("icon_cdn_version", &self.icon_cdn_version)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: name,
            value,
            expected,
        }),
    }
}
