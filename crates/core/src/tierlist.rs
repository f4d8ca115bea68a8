//! Live tierlist widget data.
//!
//! Stats providers publish tierlists in a few different JSON layouts. They
//! are all accepted through [`TierlistPayload`] and normalized into
//! [`TierEntry`] lists. When live data cannot be obtained, the widget is
//! served built-in sample entries through [`TierlistOutcome::Degraded`], so
//! consumers can always tell live data from sample data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::naming;

// ---------------------------------------------------------------------------
// Role / tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    /// Accepted spellings, canonical name first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Role::Top => &["top"],
            Role::Jungle => &["jungle", "jgl"],
            Role::Mid => &["mid", "middle"],
            Role::Adc => &["adc", "bot", "bottom"],
            Role::Support => &["support", "sup", "supp"],
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.aliases().iter().any(|a| key.eq_ignore_ascii_case(a)))
            .ok_or_else(|| CoreError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier rank; declaration order is best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(alias = "s")]
    S,
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
}

// ---------------------------------------------------------------------------
// Upstream schema
// ---------------------------------------------------------------------------

/// One champion row as published upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTierEntry {
    #[serde(alias = "champion")]
    pub name: String,
    pub tier: Tier,
    #[serde(default, alias = "winRate")]
    pub win_rate: Option<f64>,
    #[serde(default, alias = "pickRate")]
    pub pick_rate: Option<f64>,
}

/// Accepted upstream layouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TierlistPayload {
    /// A bare array of entries.
    List(Vec<RawTierEntry>),
    /// `{ "champions": [...] }`
    Champions { champions: Vec<RawTierEntry> },
    /// `{ "top": [...], "jungle": [...], ... }`
    ///
    /// Fields that are not entry arrays (timestamps, patch info) are dropped.
    ByRole(#[serde(deserialize_with = "role_lists")] BTreeMap<String, Vec<RawTierEntry>>),
}

fn role_lists<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<RawTierEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Entries(Vec<RawTierEntry>),
        Other(serde::de::IgnoredAny),
    }

    let fields = BTreeMap::<String, Field>::deserialize(deserializer)?;
    Ok(fields
        .into_iter()
        .filter_map(|(key, field)| match field {
            Field::Entries(entries) => Some((key, entries)),
            Field::Other(_) => None,
        })
        .collect())
}

impl TierlistPayload {
    /// Entries for `role`, best first.
    ///
    /// Flat layouts carry no role information and are taken as-is.
    pub fn entries_for(&self, role: Role, cdn_version: &str) -> Vec<TierEntry> {
        let raw: &[RawTierEntry] = match self {
            TierlistPayload::List(entries) => entries,
            TierlistPayload::Champions { champions } => champions,
            // Canonical key wins over aliases when a feed carries both.
            TierlistPayload::ByRole(by_role) => role
                .aliases()
                .iter()
                .find_map(|alias| {
                    by_role
                        .iter()
                        .find(|(key, _)| key.trim().eq_ignore_ascii_case(alias))
                })
                .map(|(_, entries)| entries.as_slice())
                .unwrap_or_default(),
        };

        let mut entries: Vec<TierEntry> = raw
            .iter()
            .map(|entry| {
                TierEntry::new(
                    &entry.name,
                    entry.tier,
                    entry.win_rate,
                    entry.pick_rate,
                    cdn_version,
                )
            })
            .collect();
        sort_entries(&mut entries);
        entries
    }
}

// ---------------------------------------------------------------------------
// Normalized model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierEntry {
    pub name: String,
    pub canonical_name: String,
    pub icon_url: String,
    pub tier: Tier,
    pub win_rate: Option<f64>,
    pub pick_rate: Option<f64>,
}

impl TierEntry {
    fn new(
        name: &str,
        tier: Tier,
        win_rate: Option<f64>,
        pick_rate: Option<f64>,
        cdn_version: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            canonical_name: naming::canonicalize(name),
            icon_url: naming::icon_url(name, cdn_version),
            tier,
            win_rate,
            pick_rate,
        }
    }
}

/// Order by tier, then win rate descending. Missing win rates sort last.
fn sort_entries(entries: &mut [TierEntry]) {
    entries.sort_by(|a, b| {
        let rate = |e: &TierEntry| e.win_rate.unwrap_or(f64::NEG_INFINITY);
        a.tier.cmp(&b.tier).then_with(|| rate(b).total_cmp(&rate(a)))
    });
}

/// What the tierlist widget should render, tagged by `source` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source")]
pub enum TierlistOutcome {
    #[serde(rename = "live")]
    Live { role: Role, entries: Vec<TierEntry> },
    #[serde(rename = "sample")]
    Degraded {
        role: Role,
        reason: String,
        entries: Vec<TierEntry>,
    },
}

impl TierlistOutcome {
    /// Build an outcome from a live payload; an empty result for the role
    /// degrades to sample data.
    pub fn from_payload(payload: &TierlistPayload, role: Role, cdn_version: &str) -> Self {
        let entries = payload.entries_for(role, cdn_version);
        if entries.is_empty() {
            return Self::degraded(role, format!("no live entries for role {role}"), cdn_version);
        }
        TierlistOutcome::Live { role, entries }
    }

    pub fn degraded(role: Role, reason: impl Into<String>, cdn_version: &str) -> Self {
        TierlistOutcome::Degraded {
            role,
            reason: reason.into(),
            entries: sample(role, cdn_version),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, TierlistOutcome::Live { .. })
    }

    pub fn entries(&self) -> &[TierEntry] {
        match self {
            TierlistOutcome::Live { entries, .. } | TierlistOutcome::Degraded { entries, .. } => {
                entries
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

static SAMPLE_ENTRIES: &[(Role, &str, Tier, f64, f64)] = &[
    (Role::Top, "Darius", Tier::S, 51.8, 9.2),
    (Role::Top, "K'Sante", Tier::A, 50.1, 6.4),
    (Role::Top, "Garen", Tier::B, 50.6, 7.9),
    (Role::Jungle, "Lee Sin", Tier::S, 50.2, 14.1),
    (Role::Jungle, "Kha'Zix", Tier::A, 51.0, 8.3),
    (Role::Jungle, "Wukong", Tier::B, 50.4, 4.7),
    (Role::Mid, "Ahri", Tier::S, 51.5, 10.6),
    (Role::Mid, "Twisted Fate", Tier::A, 50.3, 5.1),
    (Role::Mid, "LeBlanc", Tier::B, 49.6, 6.8),
    (Role::Adc, "Kai'Sa", Tier::S, 50.7, 19.4),
    (Role::Adc, "Miss Fortune", Tier::A, 51.2, 11.0),
    (Role::Adc, "Kog'Maw", Tier::B, 50.9, 3.2),
    (Role::Support, "Thresh", Tier::S, 50.5, 12.7),
    (Role::Support, "Renata Glasc", Tier::A, 51.3, 3.9),
    (Role::Support, "Nunu & Willump", Tier::C, 49.8, 1.1),
];

/// Built-in sample tierlist for `role`, used when live data is unavailable.
pub fn sample(role: Role, cdn_version: &str) -> Vec<TierEntry> {
    let mut entries: Vec<TierEntry> = SAMPLE_ENTRIES
        .iter()
        .filter(|(r, ..)| *r == role)
        .map(|(_, name, tier, win, pick)| {
            TierEntry::new(name, *tier, Some(*win), Some(*pick), cdn_version)
        })
        .collect();
    sort_entries(&mut entries);
    entries
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const CDN: &str = "14.1.1";

    #[test]
    fn parses_role_aliases() {
        assert_eq!("TOP".parse::<Role>(), Ok(Role::Top));
        assert_eq!("jgl".parse::<Role>(), Ok(Role::Jungle));
        assert_eq!("bot".parse::<Role>(), Ok(Role::Adc));
        assert_eq!("supp".parse::<Role>(), Ok(Role::Support));
        assert_eq!(
            "carry".parse::<Role>(),
            Err(CoreError::UnknownRole("carry".into()))
        );
    }

    #[test]
    fn accepts_bare_array() {
        let payload: TierlistPayload =
            serde_json::from_str(r#"[{"name": "Ahri", "tier": "A", "winRate": 51.0}]"#).unwrap();

        let entries = payload.entries_for(Role::Mid, CDN);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical_name, "Ahri");
        assert_eq!(entries[0].win_rate, Some(51.0));
    }

    #[test]
    fn accepts_champions_object() {
        let payload: TierlistPayload = serde_json::from_str(
            r#"{"champions": [{"champion": "Dr. Mundo", "tier": "b"}]}"#,
        )
        .unwrap();

        assert_matches!(payload, TierlistPayload::Champions { .. });
        let entries = payload.entries_for(Role::Top, CDN);
        assert_eq!(entries[0].canonical_name, "DrMundo");
        assert_eq!(entries[0].tier, Tier::B);
    }

    #[test]
    fn accepts_role_map() {
        let payload: TierlistPayload = serde_json::from_str(
            r#"{
                "jungle": [{"name": "Wukong", "tier": "S"}],
                "top": [{"name": "Garen", "tier": "C"}]
            }"#,
        )
        .unwrap();

        let jungle = payload.entries_for(Role::Jungle, CDN);
        assert_eq!(jungle.len(), 1);
        assert_eq!(jungle[0].canonical_name, "MonkeyKing");
        assert!(jungle[0].icon_url.ends_with("/14.1.1/img/champion/MonkeyKing.png"));

        assert!(payload.entries_for(Role::Support, CDN).is_empty());
    }

    #[test]
    fn role_map_prefers_canonical_key_over_alias() {
        let payload: TierlistPayload = serde_json::from_str(
            r#"{
                "bot": [{"name": "Ezreal", "tier": "A"}],
                "adc": [{"name": "Jinx", "tier": "S"}],
                "Bottom": [{"name": "Varus", "tier": "B"}]
            }"#,
        )
        .unwrap();

        let names: Vec<_> = payload
            .entries_for(Role::Adc, CDN)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Jinx"]);
    }

    #[test]
    fn role_map_matches_alias_keys_case_insensitively() {
        let payload: TierlistPayload =
            serde_json::from_str(r#"{"JGL": [{"name": "Lee Sin", "tier": "S"}]}"#).unwrap();

        let entries = payload.entries_for(Role::Jungle, CDN);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].canonical_name, "LeeSin");
    }

    #[test]
    fn role_map_skips_non_array_fields() {
        let payload: TierlistPayload = serde_json::from_str(
            r#"{
                "updated": "2024-01-01",
                "patch": 14.1,
                "top": [{"name": "Darius", "tier": "S"}]
            }"#,
        )
        .unwrap();

        assert_matches!(&payload, TierlistPayload::ByRole(map) if map.len() == 1);
        let outcome = TierlistOutcome::from_payload(&payload, Role::Top, CDN);
        assert!(outcome.is_live());
        assert_eq!(outcome.entries()[0].name, "Darius");
    }

    #[test]
    fn orders_by_tier_then_win_rate() {
        let payload: TierlistPayload = serde_json::from_str(
            r#"[
                {"name": "Garen", "tier": "B", "win_rate": 55.0},
                {"name": "Ahri", "tier": "S", "win_rate": 49.0},
                {"name": "Zed", "tier": "S"},
                {"name": "Lux", "tier": "S", "win_rate": 52.0}
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = payload
            .entries_for(Role::Mid, CDN)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Lux", "Ahri", "Zed", "Garen"]);
    }

    #[test]
    fn empty_role_degrades_to_sample() {
        let payload = TierlistPayload::ByRole(BTreeMap::new());
        let outcome = TierlistOutcome::from_payload(&payload, Role::Adc, CDN);

        assert!(!outcome.is_live());
        assert_eq!(outcome.entries(), sample(Role::Adc, CDN).as_slice());
    }

    #[test]
    fn outcome_serializes_source_tag() {
        let degraded = TierlistOutcome::degraded(Role::Top, "upstream down", CDN);
        let json = serde_json::to_value(&degraded).unwrap();
        assert_eq!(json["source"], "sample");
        assert_eq!(json["role"], "top");
        assert_eq!(json["reason"], "upstream down");

        let payload: TierlistPayload =
            serde_json::from_str(r#"[{"name": "Darius", "tier": "S"}]"#).unwrap();
        let live = TierlistOutcome::from_payload(&payload, Role::Top, CDN);
        let json = serde_json::to_value(&live).unwrap();
        assert_eq!(json["source"], "live");
        assert_eq!(json["entries"][0]["tier"], "S");
    }

    #[test]
    fn every_role_has_sample_data() {
        for role in Role::ALL {
            let entries = sample(role, CDN);
            assert!(!entries.is_empty(), "{role} has no sample entries");
            assert!(entries.windows(2).all(|w| w[0].tier <= w[1].tier));
        }
    }
}
