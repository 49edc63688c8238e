//! Shared types for the FIREPICK consensus engine.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that feed, schedule, and engine
//! modules can depend on them without circular references.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Leagues the engine understands. Anything else canonicalizes to `Other`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    Nfl,
    Nba,
    Mlb,
    Nhl,
    Ncaaf,
    Ncaab,
    Other,
}

impl Sport {
    /// All known sports (useful for iteration).
    pub const ALL: &'static [Sport] = &[
        Sport::Nfl,
        Sport::Nba,
        Sport::Mlb,
        Sport::Nhl,
        Sport::Ncaaf,
        Sport::Ncaab,
        Sport::Other,
    ];
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Nfl => write!(f, "NFL"),
            Sport::Nba => write!(f, "NBA"),
            Sport::Mlb => write!(f, "MLB"),
            Sport::Nhl => write!(f, "NHL"),
            Sport::Ncaaf => write!(f, "NCAAF"),
            Sport::Ncaab => write!(f, "NCAAB"),
            Sport::Other => write!(f, "OTHER"),
        }
    }
}

/// Parse an exact league name (case-insensitive). Free-text sport labels
/// from feeds go through the canonicalizer instead, which knows aliases.
impl std::str::FromStr for Sport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NFL" => Ok(Sport::Nfl),
            "NBA" => Ok(Sport::Nba),
            "MLB" => Ok(Sport::Mlb),
            "NHL" => Ok(Sport::Nhl),
            "NCAAF" => Ok(Sport::Ncaaf),
            "NCAAB" => Ok(Sport::Ncaab),
            "OTHER" => Ok(Sport::Other),
            _ => Err(anyhow::anyhow!("Unknown sport: {s}")),
        }
    }
}

/// Wager market type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetType {
    Spread,
    Moneyline,
    Total,
    Other,
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetType::Spread => write!(f, "SPREAD"),
            BetType::Moneyline => write!(f, "MONEYLINE"),
            BetType::Total => write!(f, "TOTAL"),
            BetType::Other => write!(f, "OTHER"),
        }
    }
}

/// Consensus confidence tier. Ordered: `None < Lean < Strong < Lock`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    None,
    Lean,
    Strong,
    Lock,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::None => write!(f, "NONE"),
            Tier::Lean => write!(f, "📈 LEAN"),
            Tier::Strong => write!(f, "🔥 STRONG"),
            Tier::Lock => write!(f, "🔒 LOCK"),
        }
    }
}

/// Live game status as reported by the schedule provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Scheduled => write!(f, "scheduled"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Final => write!(f, "final"),
        }
    }
}

// ---------------------------------------------------------------------------
// Team identity
// ---------------------------------------------------------------------------

/// Stable canonical team identifier within a sport.
///
/// Equality is only meaningful alongside a `Sport` — the same nickname can
/// identify different teams in different leagues.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        TeamId(id.into())
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of canonicalizing a free-text team label.
///
/// Unknown labels are carried through explicitly (never silently dropped)
/// so they surface as isolated singleton groups and in the schedule
/// filter's rejected list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CanonTeam {
    Known(TeamId),
    Unknown(String),
}

impl CanonTeam {
    pub fn is_known(&self) -> bool {
        matches!(self, CanonTeam::Known(_))
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            CanonTeam::Known(id) => Some(id),
            CanonTeam::Unknown(_) => None,
        }
    }

    /// Display label: the canonical id, or the raw text for unknowns.
    pub fn label(&self) -> &str {
        match self {
            CanonTeam::Known(id) => &id.0,
            CanonTeam::Unknown(raw) => raw,
        }
    }

    /// Total ordering key: known teams before unknown ones, then by label.
    pub fn sort_key(&self) -> (u8, &str) {
        match self {
            CanonTeam::Known(id) => (0, &id.0),
            CanonTeam::Unknown(raw) => (1, raw),
        }
    }
}

impl fmt::Display for CanonTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonTeam::Known(id) => write!(f, "{id}"),
            CanonTeam::Unknown(raw) => write!(f, "?{raw}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Picks
// ---------------------------------------------------------------------------

/// An as-received pick from one upstream feed. Immutable; owned by the
/// feed reader and never mutated downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPick {
    /// Analyst name, free text.
    pub capper: String,
    /// Sport label, free text ("NBA", "pro basketball", ...).
    pub sport: String,
    /// Selected side/team, free text ("LA Lakers", "Lakers", ...).
    pub side: String,
    /// Line/odds string ("-3.5", "ML -120", "O/U 47.5", ...).
    pub bet: String,
    /// Optional bet-type hint supplied by the feed.
    pub bet_type_hint: Option<String>,
    /// Optional matchup description ("Lakers @ Celtics").
    pub matchup: Option<String>,
    /// Date/time string in feed-specific format.
    pub event_time: String,
    /// Feed-source identifier.
    pub source: String,
}

impl fmt::Display for RawPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} {} {} @ {}",
            self.source, self.capper, self.sport, self.side, self.bet, self.event_time,
        )
    }
}

impl RawPick {
    /// Helper to build a test/sample pick with sensible defaults.
    #[cfg(test)]
    pub fn sample() -> Self {
        RawPick {
            capper: "Vegas Dave".to_string(),
            sport: "NBA".to_string(),
            side: "Lakers".to_string(),
            bet: "-3.5".to_string(),
            bet_type_hint: Some("spread".to_string()),
            matchup: Some("Lakers @ Celtics".to_string()),
            event_time: "2026-08-06T19:30:00-05:00".to_string(),
            source: "sharpline".to_string(),
        }
    }
}

/// Canonical, normalized form of a pick. Derived and immutable:
/// identical `RawPick` input always yields an identical `NormalizedPick`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPick {
    /// Trimmed, whitespace-collapsed analyst name (display spelling).
    pub capper: String,
    pub sport: Sport,
    pub team: CanonTeam,
    pub bet_type: BetType,
    /// Parsed line. Absent when not extractable — never defaulted to zero,
    /// because zero is a valid spread/total value.
    pub line: Option<Decimal>,
    /// Calendar day in the fixed reporting timezone.
    pub date: NaiveDate,
    /// Presentation-ready wager text ("Lakers -3.5").
    pub bet: String,
    pub matchup: Option<String>,
    /// Originating record, kept for diagnostics.
    pub raw: RawPick,
}

impl NormalizedPick {
    /// Identity key for capper deduplication: case-folded, trimmed,
    /// internal whitespace collapsed.
    pub fn capper_key(&self) -> String {
        capper_key(&self.capper)
    }
}

impl fmt::Display for NormalizedPick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} ({}) by {}",
            self.sport, self.bet, self.bet_type, self.date, self.capper,
        )
    }
}

/// Normalize an analyst name into its deduplication key.
pub fn capper_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// One game from the live-schedule provider. External, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub sport: Sport,
    pub home: TeamId,
    pub away: TeamId,
    pub start: DateTime<Utc>,
    pub status: GameStatus,
}

impl ScheduleEntry {
    /// Whether the given team plays in this game.
    pub fn involves(&self, team: &TeamId) -> bool {
        &self.home == team || &self.away == team
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} @ {} ({}, {})",
            self.sport, self.away, self.home, self.start, self.status,
        )
    }
}

/// Why the schedule filter rejected a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The pick's reporting day is not today.
    NotToday,
    /// No schedule entry matched `(sport, team)` today.
    NotScheduledToday,
    /// The team label never canonicalized, so it cannot match any entry.
    /// Usually an alias-table gap, not a filter bug.
    UnknownTeam,
    /// The sport label never canonicalized; no schedule exists for it.
    UnknownSport,
    /// The schedule provider failed and policy is fail-closed.
    ProviderUnavailable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotToday => write!(f, "not today"),
            RejectReason::NotScheduledToday => write!(f, "not scheduled today"),
            RejectReason::UnknownTeam => write!(f, "unknown team"),
            RejectReason::UnknownSport => write!(f, "unknown sport"),
            RejectReason::ProviderUnavailable => write!(f, "schedule provider unavailable"),
        }
    }
}

/// A pick the schedule filter dropped, with the reason attached so
/// operators can spot canonicalization-table gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedPick {
    pub pick: NormalizedPick,
    pub reason: RejectReason,
}

// ---------------------------------------------------------------------------
// Consensus
// ---------------------------------------------------------------------------

/// A set of picks judged to recommend the same underlying wager.
///
/// Invariant: `capper_count == cappers.len()` == the number of distinct
/// capper keys among `picks` — a capper appearing twice counts once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusGroup {
    pub sport: Sport,
    pub team: CanonTeam,
    pub bet_type: BetType,
    /// Anchor line of the group (first contributing pick's line).
    pub line: Option<Decimal>,
    pub date: NaiveDate,
    /// Display bet text, taken from the first contributing pick.
    pub bet: String,
    /// Display matchup, taken from the first contributing pick.
    pub matchup: Option<String>,
    /// Distinct capper display names, in contribution order.
    pub cappers: Vec<String>,
    pub capper_count: usize,
    /// Contributing picks, deduplicated by capper.
    pub picks: Vec<NormalizedPick>,
}

impl fmt::Display for ConsensusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) — {} capper{}",
            self.sport,
            self.bet,
            self.date,
            self.capper_count,
            if self.capper_count == 1 { "" } else { "s" },
        )
    }
}

// ---------------------------------------------------------------------------
// Formatted output
// ---------------------------------------------------------------------------

/// Presentation-ready consensus views consumed by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormattedOutput {
    /// Groups meeting the minimum capper count, in consensus order.
    pub filtered_consensus: Vec<ConsensusGroup>,
    /// Bounded, ranked list of the highest-consensus groups.
    pub top_overall: Vec<ConsensusGroup>,
    /// `filtered_consensus` partitioned per sport, each in consensus order.
    pub by_sport: std::collections::BTreeMap<Sport, Vec<ConsensusGroup>>,
    /// Contrarian-signal candidates selected by the fade predicate.
    pub fade_the_public: Vec<ConsensusGroup>,
}

/// A consensus group with its confidence tier attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredGroup {
    pub tier: Tier,
    #[serde(flatten)]
    pub group: ConsensusGroup,
}

/// Per-sport summary line for the daily-bets view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportRollup {
    pub sport: Sport,
    /// Consensus groups for this sport meeting the minimum capper count.
    pub group_count: usize,
    /// All of today's schedule-filtered picks for this sport.
    pub pick_count: usize,
    /// Best tier reached by this sport's consensus groups.
    pub best_tier: Tier,
}

/// The enriched daily summary view. A pure function of its inputs —
/// no network or storage side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DailyBetsOutput {
    pub date: Option<NaiveDate>,
    pub consensus: Vec<TieredGroup>,
    pub by_sport: Vec<SportRollup>,
    /// Picks that survived the schedule filter today.
    pub todays_pick_count: usize,
    /// Picks normalized before schedule filtering.
    pub total_pick_count: usize,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for FIREPICK.
#[derive(Debug, thiserror::Error)]
pub enum FirepickError {
    #[error("Feed error ({feed}): {message}")]
    Feed { feed: String, message: String },

    #[error("Schedule provider error ({sport}): {message}")]
    ScheduleProvider { sport: Sport, message: String },

    #[error("All configured feeds failed")]
    AllFeedsFailed,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // -- Sport tests --

    #[test]
    fn test_sport_display() {
        assert_eq!(format!("{}", Sport::Nfl), "NFL");
        assert_eq!(format!("{}", Sport::Ncaab), "NCAAB");
        assert_eq!(format!("{}", Sport::Other), "OTHER");
    }

    #[test]
    fn test_sport_from_str() {
        assert_eq!("nba".parse::<Sport>().unwrap(), Sport::Nba);
        assert_eq!(" NHL ".parse::<Sport>().unwrap(), Sport::Nhl);
        assert!("cricket".parse::<Sport>().is_err());
    }

    #[test]
    fn test_sport_serialization_roundtrip() {
        for sport in Sport::ALL {
            let json = serde_json::to_string(sport).unwrap();
            let parsed: Sport = serde_json::from_str(&json).unwrap();
            assert_eq!(*sport, parsed);
        }
        assert_eq!(serde_json::to_string(&Sport::Ncaaf).unwrap(), "\"NCAAF\"");
    }

    #[test]
    fn test_sport_all() {
        assert_eq!(Sport::ALL.len(), 7);
    }

    // -- BetType tests --

    #[test]
    fn test_bet_type_display() {
        assert_eq!(format!("{}", BetType::Spread), "SPREAD");
        assert_eq!(format!("{}", BetType::Moneyline), "MONEYLINE");
    }

    #[test]
    fn test_bet_type_serialization() {
        assert_eq!(serde_json::to_string(&BetType::Total).unwrap(), "\"TOTAL\"");
    }

    // -- Tier tests --

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::None < Tier::Lean);
        assert!(Tier::Lean < Tier::Strong);
        assert!(Tier::Strong < Tier::Lock);
    }

    #[test]
    fn test_tier_display() {
        assert!(format!("{}", Tier::Lock).contains("LOCK"));
        assert!(format!("{}", Tier::Strong).contains("STRONG"));
        assert_eq!(format!("{}", Tier::None), "NONE");
    }

    #[test]
    fn test_tier_serialization_roundtrip() {
        for tier in [Tier::None, Tier::Lean, Tier::Strong, Tier::Lock] {
            let json = serde_json::to_string(&tier).unwrap();
            let parsed: Tier = serde_json::from_str(&json).unwrap();
            assert_eq!(tier, parsed);
        }
    }

    // -- Team tests --

    #[test]
    fn test_canon_team_label() {
        let known = CanonTeam::Known(TeamId::new("Lakers"));
        let unknown = CanonTeam::Unknown("Galaxy FC".to_string());
        assert_eq!(known.label(), "Lakers");
        assert_eq!(unknown.label(), "Galaxy FC");
        assert!(known.is_known());
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_canon_team_sort_key_orders_known_first() {
        let known = CanonTeam::Known(TeamId::new("Zephyrs"));
        let unknown = CanonTeam::Unknown("Aardvarks".to_string());
        assert!(known.sort_key() < unknown.sort_key());
    }

    #[test]
    fn test_canon_team_serialization_roundtrip() {
        let team = CanonTeam::Known(TeamId::new("Lakers"));
        let json = serde_json::to_string(&team).unwrap();
        let parsed: CanonTeam = serde_json::from_str(&json).unwrap();
        assert_eq!(team, parsed);
    }

    // -- Capper key tests --

    #[test]
    fn test_capper_key_trims_and_folds() {
        assert_eq!(capper_key("  Vegas   Dave "), "vegas dave");
        assert_eq!(capper_key("VEGAS DAVE"), "vegas dave");
        assert_eq!(capper_key("vegas dave"), capper_key("Vegas  Dave"));
    }

    // -- ScheduleEntry tests --

    fn entry() -> ScheduleEntry {
        ScheduleEntry {
            sport: Sport::Nba,
            home: TeamId::new("Celtics"),
            away: TeamId::new("Lakers"),
            start: Utc::now(),
            status: GameStatus::Scheduled,
        }
    }

    #[test]
    fn test_schedule_entry_involves() {
        let e = entry();
        assert!(e.involves(&TeamId::new("Lakers")));
        assert!(e.involves(&TeamId::new("Celtics")));
        assert!(!e.involves(&TeamId::new("Knicks")));
    }

    #[test]
    fn test_schedule_entry_serialization_roundtrip() {
        let e = entry();
        let json = serde_json::to_string(&e).unwrap();
        let parsed: ScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(e, parsed);
    }

    // -- RawPick tests --

    #[test]
    fn test_raw_pick_display() {
        let raw = RawPick::sample();
        let display = format!("{raw}");
        assert!(display.contains("sharpline"));
        assert!(display.contains("Vegas Dave"));
        assert!(display.contains("-3.5"));
    }

    #[test]
    fn test_raw_pick_serialization_roundtrip() {
        let raw = RawPick::sample();
        let json = serde_json::to_string(&raw).unwrap();
        let parsed: RawPick = serde_json::from_str(&json).unwrap();
        assert_eq!(raw, parsed);
    }

    // -- ConsensusGroup tests --

    #[test]
    fn test_consensus_group_display() {
        let group = ConsensusGroup {
            sport: Sport::Nba,
            team: CanonTeam::Known(TeamId::new("Lakers")),
            bet_type: BetType::Spread,
            line: Some(dec!(-3.5)),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            bet: "Lakers -3.5".to_string(),
            matchup: None,
            cappers: vec!["A".to_string(), "B".to_string()],
            capper_count: 2,
            picks: Vec::new(),
        };
        let display = format!("{group}");
        assert!(display.contains("NBA"));
        assert!(display.contains("2 cappers"));
    }

    // -- Error tests --

    #[test]
    fn test_firepick_error_display() {
        let e = FirepickError::Feed {
            feed: "sharpline".to_string(),
            message: "connection timeout".to_string(),
        };
        assert_eq!(format!("{e}"), "Feed error (sharpline): connection timeout");

        let e = FirepickError::ScheduleProvider {
            sport: Sport::Nfl,
            message: "503".to_string(),
        };
        assert!(format!("{e}").contains("NFL"));
    }

    // -- Output shape tests --

    #[test]
    fn test_formatted_output_default_is_empty() {
        let out = FormattedOutput::default();
        assert!(out.filtered_consensus.is_empty());
        assert!(out.top_overall.is_empty());
        assert!(out.by_sport.is_empty());
        assert!(out.fade_the_public.is_empty());
    }

    #[test]
    fn test_daily_bets_default_is_empty_but_valid() {
        let daily = DailyBetsOutput::default();
        let json = serde_json::to_string(&daily).unwrap();
        let parsed: DailyBetsOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.todays_pick_count, 0);
        assert!(parsed.consensus.is_empty());
    }
}
