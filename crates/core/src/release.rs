//! Release-asset resolution.
//!
//! Turns an upstream release record into either a [`ReleaseSummary`] the
//! landing page can render directly, or an explicit [`Unavailable`] outcome
//! pointing at the repository's releases page. Resolution is total: every
//! record maps to exactly one of the two.

use serde::{Deserialize, Deserializer, Serialize};

use crate::repo::RepoId;

/// Suffix identifying the Windows installer among release assets.
pub const INSTALLER_SUFFIX: &str = ".exe";

/// Reason reported when a release carries no installer asset.
pub const REASON_NO_MATCHING_ASSET: &str = "no matching installer asset";

/// Reason reported when the release could not be fetched at all.
pub const REASON_LOOKUP_FAILED: &str = "release lookup failed";

const BYTES_PER_MEBIBYTE: f64 = 1024.0 * 1024.0;

// ---------------------------------------------------------------------------
// Upstream model
// ---------------------------------------------------------------------------

/// A published release as returned by the release registry.
///
/// Only the fields the resolver needs are modelled. A missing or `null`
/// `tag_name` becomes an empty tag rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    #[serde(rename = "tag_name", default, deserialize_with = "null_as_default")]
    pub tag: String,
    /// Assets in upstream listing order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
}

/// One downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Presentation-ready description of the installer to offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub version: String,
    pub asset_name: String,
    pub size_mebibytes: f64,
    pub download_url: String,
}

impl ReleaseSummary {
    /// One-line label for the download button, e.g.
    /// `v1.2.0 • FocusApp-Setup.exe • 50.0 MB`.
    pub fn display_line(&self) -> String {
        format!(
            "{} • {} • {:.1} MB",
            self.version, self.asset_name, self.size_mebibytes
        )
    }
}

/// No installer can be offered; the caller should link to `fallback_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailable {
    pub reason: String,
    pub fallback_url: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>, repo: &RepoId) -> Self {
        Self {
            reason: reason.into(),
            fallback_url: repo.releases_page_url(),
        }
    }
}

/// Result of resolving a release, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    Available(ReleaseSummary),
    Unavailable(Unavailable),
}

impl ReleaseOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ReleaseOutcome::Available(_))
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Predicate deciding which asset counts as the installer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetMatcher {
    /// Name ends with [`INSTALLER_SUFFIX`].
    #[default]
    SuffixOnly,
    /// Name ends with [`INSTALLER_SUFFIX`] or contains the given marker.
    SuffixOrMarker(String),
}

impl AssetMatcher {
    pub fn matches(&self, asset_name: &str) -> bool {
        if asset_name.ends_with(INSTALLER_SUFFIX) {
            return true;
        }
        match self {
            AssetMatcher::SuffixOnly => false,
            AssetMatcher::SuffixOrMarker(marker) => {
                !marker.is_empty() && asset_name.contains(marker.as_str())
            }
        }
    }
}

/// First asset in listing order accepted by `matcher`.
pub fn select_asset<'a>(assets: &'a [Asset], matcher: &AssetMatcher) -> Option<&'a Asset> {
    assets.iter().find(|asset| matcher.matches(&asset.name))
}

/// Convert a byte count to mebibytes rounded to one decimal place,
/// half away from zero.
pub fn size_mebibytes(size_bytes: u64) -> f64 {
    (size_bytes as f64 / BYTES_PER_MEBIBYTE * 10.0).round() / 10.0
}

/// Maps release records for one repository onto [`ReleaseOutcome`]s.
#[derive(Debug, Clone)]
pub struct ReleaseResolver {
    repo: RepoId,
    matcher: AssetMatcher,
}

impl ReleaseResolver {
    pub fn new(repo: RepoId) -> Self {
        Self {
            repo,
            matcher: AssetMatcher::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: AssetMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    pub fn resolve(&self, record: &ReleaseRecord) -> ReleaseOutcome {
        match select_asset(&record.assets, &self.matcher) {
            Some(asset) => ReleaseOutcome::Available(ReleaseSummary {
                version: record.tag.clone(),
                asset_name: asset.name.clone(),
                size_mebibytes: size_mebibytes(asset.size_bytes),
                download_url: asset.download_url.clone(),
            }),
            None => self.unavailable(REASON_NO_MATCHING_ASSET),
        }
    }

    /// Outcome for when there is nothing to resolve (e.g. the fetch failed).
    pub fn unavailable(&self, reason: impl Into<String>) -> ReleaseOutcome {
        ReleaseOutcome::Unavailable(Unavailable::new(reason, &self.repo))
    }
}
