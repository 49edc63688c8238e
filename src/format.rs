//! Confidence classification and output formatting.
//!
//! The tier function is total and pure. The fade-the-public predicate is
//! an injected policy value: the formatter applies whatever rule it is
//! handed and never hard-codes one. With no public-betting signal inside
//! the engine, the default predicate selects nothing.

use std::fmt;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::types::{ConsensusGroup, FormattedOutput, Tier};

/// Confidence tier for a distinct-capper count.
pub fn tier(capper_count: usize) -> Tier {
    match capper_count {
        n if n >= 4 => Tier::Lock,
        3 => Tier::Strong,
        2 => Tier::Lean,
        _ => Tier::None,
    }
}

// ---------------------------------------------------------------------------
// Fade-the-public predicate
// ---------------------------------------------------------------------------

/// Pluggable contrarian-signal rule over group attributes.
#[derive(Clone)]
pub struct FadePredicate(Arc<dyn Fn(&ConsensusGroup) -> bool + Send + Sync>);

impl FadePredicate {
    pub fn new(rule: impl Fn(&ConsensusGroup) -> bool + Send + Sync + 'static) -> Self {
        FadePredicate(Arc::new(rule))
    }

    /// The default rule: selects nothing. Deployments with a public
    /// betting-percentage signal inject their own rule.
    pub fn none() -> Self {
        FadePredicate::new(|_| false)
    }

    pub fn select(&self, group: &ConsensusGroup) -> bool {
        (self.0)(group)
    }
}

impl Default for FadePredicate {
    fn default() -> Self {
        FadePredicate::none()
    }
}

impl fmt::Debug for FadePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FadePredicate(..)")
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Produce the ranked/grouped views consumed by callers.
///
/// Input groups are expected in the aggregator's deterministic order;
/// every view preserves that order.
pub fn format_consensus(
    groups: &[ConsensusGroup],
    cfg: &EngineConfig,
    fade: &FadePredicate,
) -> FormattedOutput {
    let filtered_consensus: Vec<ConsensusGroup> = groups
        .iter()
        .filter(|g| g.capper_count >= cfg.min_cappers)
        .cloned()
        .collect();

    let top_overall: Vec<ConsensusGroup> = filtered_consensus
        .iter()
        .take(cfg.top_overall_limit)
        .cloned()
        .collect();

    let mut by_sport = std::collections::BTreeMap::new();
    for group in &filtered_consensus {
        by_sport
            .entry(group.sport)
            .or_insert_with(Vec::new)
            .push(group.clone());
    }

    let fade_the_public: Vec<ConsensusGroup> = groups
        .iter()
        .filter(|g| fade.select(g))
        .cloned()
        .collect();

    FormattedOutput {
        filtered_consensus,
        top_overall,
        by_sport,
        fade_the_public,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BetType, CanonTeam, NormalizedPick, RawPick, Sport, TeamId};
    use chrono::NaiveDate;

    // -- Tier tests --

    #[test]
    fn test_tier_cutoffs() {
        assert_eq!(tier(0), Tier::None);
        assert_eq!(tier(1), Tier::None);
        assert_eq!(tier(2), Tier::Lean);
        assert_eq!(tier(3), Tier::Strong);
        assert_eq!(tier(4), Tier::Lock);
        assert_eq!(tier(17), Tier::Lock);
    }

    #[test]
    fn test_tier_monotone_and_strong_iff_three() {
        for count in 0..50usize {
            assert!(tier(count) <= tier(count + 1));
            assert_eq!(tier(count) == Tier::Strong, count == 3);
        }
    }

    // -- Helpers --

    fn group(capper_count: usize, sport: Sport, team: &str) -> ConsensusGroup {
        let cappers: Vec<String> = (0..capper_count).map(|i| format!("capper{i}")).collect();
        let picks = cappers
            .iter()
            .map(|c| NormalizedPick {
                capper: c.clone(),
                sport,
                team: CanonTeam::Known(TeamId::new(team)),
                bet_type: BetType::Spread,
                line: None,
                date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
                bet: format!("{team} -3.5"),
                matchup: None,
                raw: RawPick {
                    capper: c.clone(),
                    sport: format!("{sport}"),
                    side: team.to_string(),
                    bet: "-3.5".to_string(),
                    bet_type_hint: None,
                    matchup: None,
                    event_time: "2026-08-06".to_string(),
                    source: "test".to_string(),
                },
            })
            .collect();
        ConsensusGroup {
            sport,
            team: CanonTeam::Known(TeamId::new(team)),
            bet_type: BetType::Spread,
            line: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            bet: format!("{team} -3.5"),
            matchup: None,
            cappers,
            capper_count,
            picks,
        }
    }

    // -- Formatter tests --

    #[test]
    fn test_min_cappers_filter() {
        let groups = vec![
            group(4, Sport::Nba, "Lakers"),
            group(2, Sport::Nba, "Celtics"),
            group(1, Sport::Nfl, "Chiefs"),
        ];
        let out = format_consensus(&groups, &EngineConfig::default(), &FadePredicate::none());
        assert_eq!(out.filtered_consensus.len(), 2);
        assert!(out
            .filtered_consensus
            .iter()
            .all(|g| g.capper_count >= 2));
    }

    #[test]
    fn test_top_overall_is_bounded_and_ordered() {
        let groups: Vec<ConsensusGroup> = (0..15)
            .map(|i| group(15 - i, Sport::Nba, &format!("Team{i:02}")))
            .collect();
        let out = format_consensus(&groups, &EngineConfig::default(), &FadePredicate::none());
        assert_eq!(out.top_overall.len(), 10);
        // Preserves the incoming ranked order.
        for pair in out.top_overall.windows(2) {
            assert!(pair[0].capper_count >= pair[1].capper_count);
        }
    }

    #[test]
    fn test_by_sport_partition() {
        let groups = vec![
            group(3, Sport::Nba, "Lakers"),
            group(2, Sport::Nfl, "Chiefs"),
            group(2, Sport::Nba, "Celtics"),
        ];
        let out = format_consensus(&groups, &EngineConfig::default(), &FadePredicate::none());
        assert_eq!(out.by_sport[&Sport::Nba].len(), 2);
        assert_eq!(out.by_sport[&Sport::Nfl].len(), 1);
        // Partition keeps the overall order within each sport.
        assert_eq!(out.by_sport[&Sport::Nba][0].capper_count, 3);
    }

    #[test]
    fn test_fade_default_selects_nothing() {
        let groups = vec![group(5, Sport::Nba, "Lakers")];
        let out = format_consensus(&groups, &EngineConfig::default(), &FadePredicate::default());
        assert!(out.fade_the_public.is_empty());
    }

    #[test]
    fn test_fade_predicate_is_injectable() {
        let groups = vec![
            group(1, Sport::Nba, "Lakers"),
            group(4, Sport::Nba, "Celtics"),
        ];
        // A custom contrarian rule: lone wolves only.
        let fade = FadePredicate::new(|g| g.capper_count == 1);
        let out = format_consensus(&groups, &EngineConfig::default(), &fade);
        assert_eq!(out.fade_the_public.len(), 1);
        assert_eq!(out.fade_the_public[0].team.label(), "Lakers");
    }

    #[test]
    fn test_configured_min_and_limit() {
        let mut cfg = EngineConfig::default();
        cfg.min_cappers = 3;
        cfg.top_overall_limit = 1;
        let groups = vec![
            group(4, Sport::Nba, "Lakers"),
            group(3, Sport::Nba, "Celtics"),
            group(2, Sport::Nba, "Knicks"),
        ];
        let out = format_consensus(&groups, &cfg, &FadePredicate::none());
        assert_eq!(out.filtered_consensus.len(), 2);
        assert_eq!(out.top_overall.len(), 1);
        assert_eq!(out.top_overall[0].capper_count, 4);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = format_consensus(&[], &EngineConfig::default(), &FadePredicate::none());
        assert!(out.filtered_consensus.is_empty());
        assert!(out.top_overall.is_empty());
        assert!(out.by_sport.is_empty());
        assert!(out.fade_the_public.is_empty());
    }
}
