//! Champion name canonicalization for the icon CDN.
//!
//! Free-text champion names (as typed by people or returned by stats
//! providers) are mapped onto the identifiers the icon service uses in its
//! file names, e.g. `"Dr. Mundo"` → `DrMundo`, `"Wukong"` → `MonkeyKing`.

/// Base URL of the champion icon CDN.
pub const ICON_CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Normalized name → canonical identifier.
///
/// Keys are in the form produced by [`normalize`]. Only names the generic
/// rule gets wrong need an entry.
static CANONICAL_NAMES: &[(&str, &str)] = &[
    ("asol", "AurelionSol"),
    ("aurelion sol", "AurelionSol"),
    ("bel'veth", "Belveth"),
    ("cho'gath", "Chogath"),
    ("dr mundo", "DrMundo"),
    ("j4", "JarvanIV"),
    ("jarvan iv", "JarvanIV"),
    ("k'sante", "KSante"),
    ("kai'sa", "Kaisa"),
    ("kha'zix", "Khazix"),
    ("kog'maw", "KogMaw"),
    ("leblanc", "Leblanc"),
    ("lee sin", "LeeSin"),
    ("master yi", "MasterYi"),
    ("mf", "MissFortune"),
    ("miss fortune", "MissFortune"),
    ("mundo", "DrMundo"),
    ("nunu willump", "Nunu"),
    ("rek'sai", "RekSai"),
    ("renata glasc", "Renata"),
    ("tahm kench", "TahmKench"),
    ("tf", "TwistedFate"),
    ("twisted fate", "TwistedFate"),
    ("vel'koz", "Velkoz"),
    ("wukong", "MonkeyKing"),
    ("xin zhao", "XinZhao"),
];

/// Lowercase, keep only `[a-z0-9' ]`, collapse whitespace runs, trim.
pub fn normalize(raw: &str) -> String {
    let kept: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '\'' || *c == ' ')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical icon identifier for a free-text champion name.
///
/// Never fails: names missing from the table get the first character
/// uppercased, the rest lowercased and spaces removed.
pub fn canonicalize(raw: &str) -> String {
    let key = normalize(raw);

    if let Some((_, canonical)) = CANONICAL_NAMES.iter().find(|(k, _)| *k == key) {
        return (*canonical).to_string();
    }

    let mut chars = key.chars().filter(|c| !c.is_whitespace());
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Icon URL for a champion on the given CDN data version.
pub fn icon_url(raw: &str, cdn_version: &str) -> String {
    format!(
        "{ICON_CDN_BASE}/{cdn_version}/img/champion/{}.png",
        canonicalize(raw)
    )
}
