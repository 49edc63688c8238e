//! Pick normalization: heterogeneous raw feed records → `NormalizedPick`.
//!
//! Normalization is a pure transformation. Malformed records never abort
//! the batch — they are dropped and counted per reason. Identical input
//! always produces identical output.
//!
//! Bet-type/line parsing precedence, in order:
//!   1. The feed's explicit bet-type hint.
//!   2. Total markers in the bet text ("O/U 47.5", "over 210", "u47.5").
//!   3. Moneyline markers ("ML", "moneyline").
//!   4. Pick'em markers ("PK", "pick'em") — a spread of exactly zero.
//!   5. A bare signed number: magnitude >= 100 reads as moneyline odds
//!      (a price, not a line); anything smaller reads as a spread.
//!   6. Otherwise `OTHER` with no line.
//!
//! A line that cannot be extracted stays `None` — zero is a real spread
//! and total value and must never stand in for "unknown".
//!
//! Dates resolve to one calendar day at the configured fixed UTC offset;
//! the day boundary is 00:00 at that offset. Timestamps carrying their own
//! offset are converted; naive timestamps are taken as already local to
//! the reporting timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::canon;
use crate::config::EngineConfig;
use crate::types::{BetType, NormalizedPick, RawPick};

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Why a raw record was dropped during normalization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingCapper,
    MissingSide,
    BadDate,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MissingCapper => write!(f, "missing capper"),
            DropReason::MissingSide => write!(f, "missing side"),
            DropReason::BadDate => write!(f, "bad date"),
        }
    }
}

/// Result of normalizing one batch of raw records.
#[derive(Debug, Clone, Serialize, Default)]
pub struct NormalizedBatch {
    pub picks: Vec<NormalizedPick>,
    pub dropped: usize,
    pub drop_reasons: BTreeMap<DropReason, usize>,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a batch of raw picks. Pure; bad records are dropped with a
/// per-reason count instead of raising.
pub fn normalize(raw: &[RawPick], cfg: &EngineConfig) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for record in raw {
        match normalize_one(record, cfg) {
            Ok(pick) => batch.picks.push(pick),
            Err(reason) => {
                debug!(record = %record, reason = %reason, "Dropped raw pick");
                batch.dropped += 1;
                *batch.drop_reasons.entry(reason).or_insert(0) += 1;
            }
        }
    }

    batch
}

fn normalize_one(raw: &RawPick, cfg: &EngineConfig) -> Result<NormalizedPick, DropReason> {
    let capper = collapse(&raw.capper);
    if capper.is_empty() {
        return Err(DropReason::MissingCapper);
    }

    let side = collapse(&raw.side);
    if side.is_empty() {
        return Err(DropReason::MissingSide);
    }

    let date = resolve_report_day(&raw.event_time, cfg.reporting_offset_hours)
        .ok_or(DropReason::BadDate)?;

    let sport = canon::canonicalize_sport(&raw.sport);
    let team = canon::canonicalize_team(sport, &side);
    let (bet_type, line) = parse_bet(&raw.bet, raw.bet_type_hint.as_deref());

    let bet_text = collapse(&raw.bet);
    let bet = if bet_text.is_empty() {
        team.label().to_string()
    } else {
        format!("{} {}", team.label(), bet_text)
    };

    Ok(NormalizedPick {
        capper,
        sport,
        team,
        bet_type,
        line,
        date,
        bet,
        matchup: raw.matchup.as_deref().map(collapse).filter(|m| !m.is_empty()),
        raw: raw.clone(),
    })
}

/// Trim and collapse internal whitespace runs.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Bet parsing
// ---------------------------------------------------------------------------

/// Parse bet type and numeric line from the unstructured bet string,
/// honoring an optional feed-supplied hint. See the module docs for the
/// precedence order.
pub(crate) fn parse_bet(bet: &str, hint: Option<&str>) -> (BetType, Option<Decimal>) {
    let lowered = bet.to_lowercase();

    if let Some(bt) = hint.and_then(hint_bet_type) {
        return match bt {
            BetType::Moneyline => (BetType::Moneyline, None),
            BetType::Total => (BetType::Total, first_number(&lowered).map(|n| n.abs())),
            BetType::Spread if is_pickem(&lowered) => (BetType::Spread, Some(Decimal::ZERO)),
            BetType::Spread => (BetType::Spread, first_number(&lowered)),
            BetType::Other => (BetType::Other, None),
        };
    }

    if has_total_marker(&lowered) {
        return (BetType::Total, first_number(&lowered).map(|n| n.abs()));
    }
    if has_moneyline_marker(&lowered) {
        return (BetType::Moneyline, None);
    }
    if is_pickem(&lowered) {
        return (BetType::Spread, Some(Decimal::ZERO));
    }
    if let Some(n) = first_number(&lowered) {
        if n.abs() >= dec!(100) {
            return (BetType::Moneyline, None);
        }
        return (BetType::Spread, Some(n));
    }

    (BetType::Other, None)
}

fn hint_bet_type(hint: &str) -> Option<BetType> {
    match collapse(hint).to_lowercase().as_str() {
        "spread" | "point spread" | "ats" | "line" | "ps" => Some(BetType::Spread),
        "ml" | "moneyline" | "money line" => Some(BetType::Moneyline),
        "total" | "totals" | "o/u" | "ou" | "over/under" | "over" | "under" => {
            Some(BetType::Total)
        }
        _ => None,
    }
}

fn has_total_marker(lowered: &str) -> bool {
    if lowered.contains("o/u") || lowered.contains("over") || lowered.contains("under") {
        return true;
    }
    // "o47.5", "u 47.5", "ou 47.5"
    lowered.split_whitespace().any(|tok| {
        tok == "o" || tok == "u" || tok == "ou" || {
            let rest = tok.strip_prefix('o').or_else(|| tok.strip_prefix('u'));
            rest.map(|r| r.parse::<Decimal>().is_ok()).unwrap_or(false)
        }
    })
}

fn has_moneyline_marker(lowered: &str) -> bool {
    lowered.contains("moneyline")
        || lowered.contains("money line")
        || lowered.split_whitespace().any(|tok| tok == "ml")
}

fn is_pickem(lowered: &str) -> bool {
    lowered.contains("pick'em")
        || lowered.contains("pickem")
        || lowered.split_whitespace().any(|tok| tok == "pk")
}

/// First numeric token in the text, sign preserved. Non-numeric characters
/// around a token are stripped ("(-110)" parses as -110).
fn first_number(text: &str) -> Option<Decimal> {
    for tok in text.split(|c: char| c.is_whitespace() || c == ',') {
        let cleaned: String = tok
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '+' || *c == '-')
            .collect();
        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Ok(n) = cleaned.trim_start_matches('+').parse::<Decimal>() {
            return Some(n);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Date resolution
// ---------------------------------------------------------------------------

/// Resolve a feed date/time expression to one calendar day in the fixed
/// reporting timezone. Returns `None` for unparseable expressions.
pub(crate) fn resolve_report_day(text: &str, offset_hours: i32) -> Option<NaiveDate> {
    let t = text.trim();
    let offset = FixedOffset::east_opt(offset_hours * 3600)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&offset).date_naive());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(naive.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d);
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
