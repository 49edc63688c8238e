//! Schedule filtering: keep only picks on games occurring today.
//!
//! This is the main correctness gate against picks referencing games that
//! already happened and against canonicalization-table gaps (a team id
//! that never resolves can't match the schedule — the rejected list with
//! reasons exists to surface exactly that).
//!
//! Failure policy is explicit and configured, never hard-coded: fail-open
//! passes a sport's picks through unfiltered when its schedule fetch
//! fails (degraded quality beats zero picks); fail-closed rejects them.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use super::ScheduleProvider;
use crate::config::{EngineConfig, SchedulePolicy};
use crate::types::{CanonTeam, NormalizedPick, RejectReason, RejectedPick, Sport, TeamId};

/// Partition produced by the schedule filter.
#[derive(Debug, Clone, Default)]
pub struct ScheduleOutcome {
    /// Picks on games confirmed (or assumed, under fail-open) for today.
    pub kept: Vec<NormalizedPick>,
    /// Everything else, with the reason attached.
    pub rejected: Vec<RejectedPick>,
    /// Sports whose schedule fetch failed and were passed through
    /// unfiltered under fail-open.
    pub degraded: Vec<Sport>,
}

/// Cross-reference picks against the live schedule for `today`.
///
/// A pick survives when its `(sport, team)` appears among today's
/// schedule entries for that sport. The only suspension point in the
/// whole pipeline is the provider call made here.
pub async fn filter_todays_picks(
    picks: Vec<NormalizedPick>,
    today: NaiveDate,
    provider: &dyn ScheduleProvider,
    cfg: &EngineConfig,
) -> ScheduleOutcome {
    let mut outcome = ScheduleOutcome::default();

    // Bucket by sport, keeping input order within each bucket. BTreeMap
    // gives a stable sport iteration order.
    let mut by_sport: BTreeMap<Sport, Vec<NormalizedPick>> = BTreeMap::new();
    for pick in picks {
        if pick.date != today {
            outcome.rejected.push(RejectedPick {
                pick,
                reason: RejectReason::NotToday,
            });
            continue;
        }
        by_sport.entry(pick.sport).or_default().push(pick);
    }

    for (sport, sport_picks) in by_sport {
        if sport == Sport::Other {
            // No schedule exists for an uncanonicalized sport.
            for pick in sport_picks {
                outcome.rejected.push(RejectedPick {
                    pick,
                    reason: RejectReason::UnknownSport,
                });
            }
            continue;
        }

        match provider.todays_games(sport, today).await {
            Ok(entries) => {
                let mut playing: HashSet<TeamId> = HashSet::new();
                for entry in &entries {
                    playing.insert(entry.home.clone());
                    playing.insert(entry.away.clone());
                }
                debug!(%sport, games = entries.len(), "Schedule fetched");

                for pick in sport_picks {
                    let verdict = match &pick.team {
                        CanonTeam::Known(id) if playing.contains(id) => None,
                        CanonTeam::Known(_) => Some(RejectReason::NotScheduledToday),
                        CanonTeam::Unknown(_) => Some(RejectReason::UnknownTeam),
                    };
                    match verdict {
                        None => outcome.kept.push(pick),
                        Some(reason) => outcome.rejected.push(RejectedPick { pick, reason }),
                    }
                }
            }
            Err(e) => match cfg.schedule_policy {
                SchedulePolicy::FailOpen => {
                    warn!(
                        %sport,
                        error = %e,
                        "Schedule fetch failed — passing picks through unfiltered"
                    );
                    outcome.degraded.push(sport);
                    outcome.kept.extend(sport_picks);
                }
                SchedulePolicy::FailClosed => {
                    warn!(%sport, error = %e, "Schedule fetch failed — rejecting picks");
                    for pick in sport_picks {
                        outcome.rejected.push(RejectedPick {
                            pick,
                            reason: RejectReason::ProviderUnavailable,
                        });
                    }
                }
            },
        }
    }

    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
