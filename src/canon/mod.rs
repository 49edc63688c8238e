//! Team and sport canonicalization.
//!
//! Resolves free-text labels from feeds into stable identifiers via static
//! alias tables. Matching is case-insensitive, whitespace-normalized, and
//! exact-after-normalization — no edit-distance or similarity heuristics.
//! Pure table lookups, no side effects.

pub mod teams;

use crate::types::{CanonTeam, Sport, TeamId};
use teams::TeamAlias;

// ---------------------------------------------------------------------------
// Sport aliases
// ---------------------------------------------------------------------------

struct SportAlias {
    sport: Sport,
    aliases: &'static [&'static str],
}

/// Bare "football"/"basketball" resolve to the pro league; college picks
/// must say so ("college football", "cfb", ...).
const SPORT_ALIASES: &[SportAlias] = &[
    SportAlias { sport: Sport::Nfl, aliases: &["nfl", "football", "pro football", "american football"] },
    SportAlias { sport: Sport::Nba, aliases: &["nba", "basketball", "pro basketball"] },
    SportAlias { sport: Sport::Mlb, aliases: &["mlb", "baseball", "major league baseball"] },
    SportAlias { sport: Sport::Nhl, aliases: &["nhl", "hockey", "ice hockey"] },
    SportAlias { sport: Sport::Ncaaf, aliases: &["ncaaf", "college football", "cfb", "ncaa football"] },
    SportAlias { sport: Sport::Ncaab, aliases: &["ncaab", "college basketball", "cbb", "ncaa basketball", "mens college basketball"] },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Lowercase and collapse runs of whitespace. This is the only text
/// transformation applied before table lookup.
fn normalize_label(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a free-text sport label. Unrecognized labels map to
/// `Sport::Other` rather than being dropped.
pub fn canonicalize_sport(text: &str) -> Sport {
    let needle = normalize_label(text);
    SPORT_ALIASES
        .iter()
        .find(|sa| sa.aliases.contains(&needle.as_str()))
        .map(|sa| sa.sport)
        .unwrap_or(Sport::Other)
}

/// The alias table for one sport, if the sport has one.
fn table_for(sport: Sport) -> Option<&'static [TeamAlias]> {
    match sport {
        Sport::Nfl => Some(teams::NFL_TEAMS),
        Sport::Nba => Some(teams::NBA_TEAMS),
        Sport::Mlb => Some(teams::MLB_TEAMS),
        Sport::Nhl => Some(teams::NHL_TEAMS),
        Sport::Ncaaf => Some(teams::NCAAF_TEAMS),
        Sport::Ncaab => Some(teams::NCAAB_TEAMS),
        Sport::Other => None,
    }
}

/// Resolve a free-text team label within a sport.
///
/// A label matches when it equals the canonical id or any alias after
/// normalization. Unresolved labels come back as `CanonTeam::Unknown`
/// carrying the trimmed original text.
pub fn canonicalize_team(sport: Sport, text: &str) -> CanonTeam {
    let needle = normalize_label(text);
    if let Some(table) = table_for(sport) {
        for entry in table {
            if entry.id.to_lowercase() == needle || entry.aliases.contains(&needle.as_str()) {
                return CanonTeam::Known(TeamId::new(entry.id));
            }
        }
    }
    CanonTeam::Unknown(text.split_whitespace().collect::<Vec<_>>().join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
