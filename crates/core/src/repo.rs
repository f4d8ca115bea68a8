//! Repository identifiers for the release registry.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Base URL for human-facing GitHub pages.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Repository whose releases this deployment publishes.
pub const DEFAULT_REPO: &str = "mhommet/FocusAPP";

/// A validated `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Parse an `owner/name` string.
    ///
    /// Both parts must be non-empty and free of whitespace, and there must be
    /// exactly one `/`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidRepoId(raw.to_string());

        let (owner, name) = raw.split_once('/').ok_or_else(invalid)?;
        let valid_part = |part: &str| {
            !part.is_empty() && !part.contains('/') && !part.chars().any(char::is_whitespace)
        };

        if !valid_part(owner) || !valid_part(name) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public page listing the latest release. Used as the fallback link
    /// whenever no installer can be offered directly.
    pub fn releases_page_url(&self) -> String {
        format!("{GITHUB_WEB_BASE}/{}/{}/releases/latest", self.owner, self.name)
    }

    /// REST API path (relative to the API base URL) of the latest release.
    pub fn latest_release_path(&self) -> String {
        format!("/repos/{}/{}/releases/latest", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_repo() {
        let repo = RepoId::parse(DEFAULT_REPO).unwrap();
        assert_eq!(repo.owner(), "mhommet");
        assert_eq!(repo.name(), "FocusAPP");
        assert_eq!(repo.to_string(), DEFAULT_REPO);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "a", "a/", "/b", "a/b/c", "a b/c", "a/ b"] {
            assert_eq!(
                RepoId::parse(raw),
                Err(CoreError::InvalidRepoId(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn builds_urls() {
        let repo: RepoId = "mhommet/FocusAPP".parse().unwrap();
        assert_eq!(
            repo.releases_page_url(),
            "https://github.com/mhommet/FocusAPP/releases/latest"
        );
        assert_eq!(
            repo.latest_release_path(),
            "/repos/mhommet/FocusAPP/releases/latest"
        );
    }
}
