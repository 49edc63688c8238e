//! Daily-bets composition.
//!
//! Reshapes already-computed consensus output into the enriched daily
//! summary: tier labels, per-sport rollups, and totals. No I/O, no
//! schedule lookups, no normalization — a pure function of its inputs
//! that tolerates a zero-pick day.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::format::tier;
use crate::types::{
    DailyBetsOutput, FormattedOutput, NormalizedPick, Sport, SportRollup, Tier, TieredGroup,
};

/// Combine formatted consensus with today's schedule-filtered picks.
pub fn build_daily_bets(
    formatted: &FormattedOutput,
    todays_picks: &[NormalizedPick],
    total_picks: usize,
    date: Option<NaiveDate>,
) -> DailyBetsOutput {
    let consensus: Vec<TieredGroup> = formatted
        .filtered_consensus
        .iter()
        .map(|group| TieredGroup {
            tier: tier(group.capper_count),
            group: group.clone(),
        })
        .collect();

    // Roll up every sport that shows up anywhere today.
    let mut sports: BTreeSet<Sport> = formatted.by_sport.keys().copied().collect();
    sports.extend(todays_picks.iter().map(|p| p.sport));

    let by_sport: Vec<SportRollup> = sports
        .into_iter()
        .map(|sport| {
            let groups = formatted.by_sport.get(&sport);
            let group_count = groups.map(|g| g.len()).unwrap_or(0);
            let best_tier = groups
                .into_iter()
                .flatten()
                .map(|g| tier(g.capper_count))
                .max()
                .unwrap_or(Tier::None);
            SportRollup {
                sport,
                group_count,
                pick_count: todays_picks.iter().filter(|p| p.sport == sport).count(),
                best_tier,
            }
        })
        .collect();

    DailyBetsOutput {
        date,
        consensus,
        by_sport,
        todays_pick_count: todays_picks.len(),
        total_pick_count: total_picks,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::consensus::build_consensus;
    use crate::format::{format_consensus, FadePredicate};
    use crate::types::{BetType, CanonTeam, RawPick, TeamId};
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn pick(capper: &str, sport: Sport, team: &str) -> NormalizedPick {
        NormalizedPick {
            capper: capper.to_string(),
            sport,
            team: CanonTeam::Known(TeamId::new(team)),
            bet_type: BetType::Spread,
            line: Some(dec!(-3.5)),
            date: day(),
            bet: format!("{team} -3.5"),
            matchup: None,
            raw: RawPick {
                capper: capper.to_string(),
                sport: format!("{sport}"),
                side: team.to_string(),
                bet: "-3.5".to_string(),
                bet_type_hint: None,
                matchup: None,
                event_time: "2026-08-06".to_string(),
                source: "test".to_string(),
            },
        }
    }

    fn compose(picks: &[NormalizedPick], total: usize) -> DailyBetsOutput {
        let cfg = EngineConfig::default();
        let groups = build_consensus(picks, &cfg);
        let formatted = format_consensus(&groups, &cfg, &FadePredicate::none());
        build_daily_bets(&formatted, picks, total, Some(day()))
    }

    #[test]
    fn test_tiers_attached() {
        let picks = vec![
            pick("A", Sport::Nba, "Lakers"),
            pick("B", Sport::Nba, "Lakers"),
            pick("C", Sport::Nba, "Lakers"),
        ];
        let daily = compose(&picks, 3);
        assert_eq!(daily.consensus.len(), 1);
        assert_eq!(daily.consensus[0].tier, Tier::Strong);
        assert_eq!(daily.consensus[0].group.capper_count, 3);
    }

    #[test]
    fn test_per_sport_rollups() {
        let picks = vec![
            pick("A", Sport::Nba, "Lakers"),
            pick("B", Sport::Nba, "Lakers"),
            pick("C", Sport::Nba, "Celtics"),
            pick("D", Sport::Nfl, "Chiefs"),
        ];
        let daily = compose(&picks, 4);

        let nba = daily.by_sport.iter().find(|r| r.sport == Sport::Nba).unwrap();
        assert_eq!(nba.pick_count, 3);
        assert_eq!(nba.group_count, 1); // only the Lakers group reaches min_cappers
        assert_eq!(nba.best_tier, Tier::Lean);

        // The singleton NFL pick still rolls up, with no qualifying groups.
        let nfl = daily.by_sport.iter().find(|r| r.sport == Sport::Nfl).unwrap();
        assert_eq!(nfl.pick_count, 1);
        assert_eq!(nfl.group_count, 0);
        assert_eq!(nfl.best_tier, Tier::None);
    }

    #[test]
    fn test_counts() {
        let picks = vec![pick("A", Sport::Nba, "Lakers")];
        let daily = compose(&picks, 7);
        assert_eq!(daily.todays_pick_count, 1);
        assert_eq!(daily.total_pick_count, 7);
        assert_eq!(daily.date, Some(day()));
    }

    #[test]
    fn test_empty_day_is_well_formed() {
        let daily = compose(&[], 0);
        assert_eq!(daily.todays_pick_count, 0);
        assert_eq!(daily.total_pick_count, 0);
        assert!(daily.consensus.is_empty());
        assert!(daily.by_sport.is_empty());
        // Still serializes into a complete shape.
        let json = serde_json::to_value(&daily).unwrap();
        assert!(json.get("consensus").unwrap().is_array());
    }

    #[test]
    fn test_pure_and_repeatable() {
        let picks = vec![
            pick("A", Sport::Nba, "Lakers"),
            pick("B", Sport::Nba, "Lakers"),
        ];
        let first = compose(&picks, 2);
        let second = compose(&picks, 2);
        assert_eq!(first, second);
    }
}
