//! Consensus aggregation: grouping normalized picks that recommend the
//! same underlying wager and counting distinct agreeing cappers.
//!
//! Groups key on `(sport, team, bet_type, date)` plus line compatibility:
//! two picks with different lines share a group only when both lines are
//! present and within the configured tolerance of the group's anchor line
//! (the first contributing pick's line), or when both are absent. A pick
//! with no line never joins a group that has one — and vice versa — since
//! equivalence can't be established.
//!
//! Tolerance-based equivalence is not transitive, so picks are first
//! sorted into a canonical order and then assigned greedily against group
//! anchors. Reruns over the same input are byte-identical.
//!
//! Purely in-memory; no network or storage access.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{BetType, ConsensusGroup, NormalizedPick};

/// Build consensus groups from normalized picks.
///
/// Output ordering is deterministic and independent of input order:
/// `capper_count` descending, then sport, team, bet type, line, date.
pub fn build_consensus(picks: &[NormalizedPick], cfg: &EngineConfig) -> Vec<ConsensusGroup> {
    // Canonical pick order makes greedy group assignment reproducible.
    let mut sorted: Vec<&NormalizedPick> = picks.iter().collect();
    sorted.sort_by(|a, b| {
        a.sport
            .cmp(&b.sport)
            .then_with(|| a.team.sort_key().cmp(&b.team.sort_key()))
            .then_with(|| a.bet_type.cmp(&b.bet_type))
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.capper_key().cmp(&b.capper_key()))
            .then_with(|| a.raw.source.cmp(&b.raw.source))
    });

    let mut groups: Vec<ConsensusGroup> = Vec::new();

    for pick in sorted {
        // Unknown-team picks stay isolated: they never merge with anything.
        if pick.team.is_known() {
            let tolerance = tolerance_for(cfg, pick.bet_type);
            if let Some(group) = groups.iter_mut().find(|g| {
                g.sport == pick.sport
                    && g.team == pick.team
                    && g.bet_type == pick.bet_type
                    && g.date == pick.date
                    && lines_compatible(g.line, pick.line, tolerance)
            }) {
                add_member(group, pick);
                continue;
            }
        }
        groups.push(new_group(pick));
    }

    groups.sort_by(|a, b| {
        b.capper_count
            .cmp(&a.capper_count)
            .then_with(|| a.sport.cmp(&b.sport))
            .then_with(|| a.team.sort_key().cmp(&b.team.sort_key()))
            .then_with(|| a.bet_type.cmp(&b.bet_type))
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.date.cmp(&b.date))
    });

    debug!(picks = picks.len(), groups = groups.len(), "Consensus built");
    groups
}

/// Whether two lines count as the same market under the tolerance.
fn lines_compatible(a: Option<Decimal>, b: Option<Decimal>, tolerance: Decimal) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => (x - y).abs() <= tolerance,
        _ => false,
    }
}

fn tolerance_for(cfg: &EngineConfig, bet_type: BetType) -> Decimal {
    match bet_type {
        BetType::Spread => cfg.line_tolerance.spread,
        BetType::Total => cfg.line_tolerance.total,
        BetType::Moneyline | BetType::Other => Decimal::ZERO,
    }
}

/// Add a pick to a group unless its capper already contributed —
/// a capper appearing twice for the same wager counts once.
fn add_member(group: &mut ConsensusGroup, pick: &NormalizedPick) {
    let key = pick.capper_key();
    if group.picks.iter().any(|p| p.capper_key() == key) {
        debug!(capper = %pick.capper, bet = %group.bet, "Duplicate capper contribution ignored");
        return;
    }
    group.cappers.push(pick.capper.clone());
    group.picks.push(pick.clone());
    group.capper_count = group.cappers.len();
}

fn new_group(pick: &NormalizedPick) -> ConsensusGroup {
    ConsensusGroup {
        sport: pick.sport,
        team: pick.team.clone(),
        bet_type: pick.bet_type,
        line: pick.line,
        date: pick.date,
        bet: pick.bet.clone(),
        matchup: pick.matchup.clone(),
        cappers: vec![pick.capper.clone()],
        capper_count: 1,
        picks: vec![pick.clone()],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
