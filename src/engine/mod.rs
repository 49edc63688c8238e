//! Pipeline orchestration.
//!
//! One invocation runs the whole chain — fetch feeds → normalize →
//! schedule-filter → aggregate → format → compose — over freshly
//! allocated data, so concurrent invocations share no mutable state.
//! The schedule lookup is the only suspension point with external I/O.
//!
//! Feed fetches run concurrently and tolerate partial failure: the
//! pipeline proceeds with whatever sources returned. Only when every
//! feed fails does the outcome carry `success = false`, so callers can
//! report "no data available" instead of presenting an empty result as
//! complete.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::consensus::build_consensus;
use crate::daily::build_daily_bets;
use crate::feeds::PickFeed;
use crate::format::{format_consensus, FadePredicate};
use crate::normalize::{normalize, DropReason};
use crate::schedule::filter::filter_todays_picks;
use crate::schedule::ScheduleProvider;
use crate::types::{
    ConsensusGroup, DailyBetsOutput, FirepickError, FormattedOutput, NormalizedPick,
    RejectedPick, Sport,
};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Diagnostics for one pipeline run.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PipelineReport {
    /// Correlates log lines across one run.
    pub run_id: String,
    pub feeds_succeeded: usize,
    pub feeds_failed: Vec<String>,
    /// Raw records received across all feeds.
    pub raw_count: usize,
    /// Records dropped during normalization.
    pub dropped: usize,
    pub drop_reasons: BTreeMap<DropReason, usize>,
    /// Picks the schedule filter rejected.
    pub rejected_count: usize,
}

/// Everything one pipeline run produces. Freshly allocated per run and
/// discarded after the response — nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
    /// The reporting day this run covered.
    pub date: NaiveDate,
    /// Today's schedule-filtered picks.
    pub picks: Vec<NormalizedPick>,
    pub rejected: Vec<RejectedPick>,
    pub degraded_sports: Vec<Sport>,
    /// All consensus groups, unfiltered, in deterministic order.
    pub groups: Vec<ConsensusGroup>,
    pub formatted: FormattedOutput,
    pub daily: DailyBetsOutput,
    pub report: PipelineReport,
}

/// Current calendar day at the fixed reporting offset.
pub fn reporting_today(offset_hours: i32) -> NaiveDate {
    let offset = FixedOffset::east_opt(offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
    Utc::now().with_timezone(&offset).date_naive()
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run one complete pipeline invocation.
pub async fn run_pipeline(
    feeds: &[Box<dyn PickFeed>],
    provider: &dyn ScheduleProvider,
    cfg: &EngineConfig,
    fade: &FadePredicate,
) -> PipelineOutcome {
    let run_id = uuid::Uuid::new_v4().to_string();
    let today = reporting_today(cfg.reporting_offset_hours);

    // 1. Fetch all feeds concurrently; a failing source is skipped.
    let results = join_all(feeds.iter().map(|feed| feed.fetch_picks())).await;

    let mut raw = Vec::new();
    let mut feeds_failed = Vec::new();
    let mut feeds_succeeded = 0usize;
    for (feed, result) in feeds.iter().zip(results) {
        match result {
            Ok(picks) => {
                feeds_succeeded += 1;
                raw.extend(picks);
            }
            Err(e) => {
                warn!(run_id, feed = feed.name(), error = %e, "Feed fetch failed, continuing without");
                feeds_failed.push(feed.name().to_string());
            }
        }
    }
    let all_failed = !feeds.is_empty() && feeds_succeeded == 0;

    // 2. Normalize.
    let batch = normalize(&raw, cfg);
    let total_picks = batch.picks.len();

    // 3. Schedule filter — the pipeline's only external call.
    let filtered = filter_todays_picks(batch.picks, today, provider, cfg).await;

    // 4–6. Aggregate, classify/format, compose.
    let groups = build_consensus(&filtered.kept, cfg);
    let formatted = format_consensus(&groups, cfg, fade);
    let daily = build_daily_bets(&formatted, &filtered.kept, total_picks, Some(today));

    info!(
        run_id,
        raw = raw.len(),
        normalized = total_picks,
        kept = filtered.kept.len(),
        rejected = filtered.rejected.len(),
        groups = groups.len(),
        degraded = filtered.degraded.len(),
        "Pipeline run complete"
    );

    PipelineOutcome {
        success: !all_failed,
        error: all_failed.then(|| FirepickError::AllFeedsFailed.to_string()),
        generated_at: Utc::now(),
        date: today,
        picks: filtered.kept,
        rejected: filtered.rejected,
        degraded_sports: filtered.degraded,
        groups,
        formatted,
        daily,
        report: PipelineReport {
            run_id,
            feeds_succeeded,
            feeds_failed,
            raw_count: raw.len(),
            dropped: batch.dropped,
            drop_reasons: batch.drop_reasons,
            rejected_count: 0,
        },
    }
    .finalize()
}

impl PipelineOutcome {
    fn finalize(mut self) -> Self {
        self.report.rejected_count = self.rejected.len();
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, RawPick, ScheduleEntry, TeamId};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct StaticFeed {
        name: String,
        picks: Vec<RawPick>,
        fail: bool,
    }

    #[async_trait]
    impl PickFeed for StaticFeed {
        async fn fetch_picks(&self) -> Result<Vec<RawPick>> {
            if self.fail {
                return Err(anyhow!("feed down"));
            }
            Ok(self.picks.clone())
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    struct EverythingScheduled;

    #[async_trait]
    impl ScheduleProvider for EverythingScheduled {
        async fn todays_games(
            &self,
            sport: Sport,
            date: NaiveDate,
        ) -> Result<Vec<ScheduleEntry>> {
            // One game covering the teams the tests use.
            Ok(vec![ScheduleEntry {
                sport,
                home: TeamId::new("Celtics"),
                away: TeamId::new("Lakers"),
                start: date.and_hms_opt(19, 0, 0).expect("valid time").and_utc(),
                status: GameStatus::Scheduled,
            }])
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn todays_event_time(cfg: &EngineConfig) -> String {
        reporting_today(cfg.reporting_offset_hours)
            .format("%Y-%m-%d")
            .to_string()
    }

    fn raw(capper: &str, side: &str, cfg: &EngineConfig) -> RawPick {
        RawPick {
            capper: capper.to_string(),
            sport: "NBA".to_string(),
            side: side.to_string(),
            bet: "-3.5".to_string(),
            bet_type_hint: Some("spread".to_string()),
            matchup: None,
            event_time: todays_event_time(cfg),
            source: "test".to_string(),
        }
    }

    fn feed(name: &str, picks: Vec<RawPick>, fail: bool) -> Box<dyn PickFeed> {
        Box::new(StaticFeed {
            name: name.to_string(),
            picks,
            fail,
        })
    }

    #[tokio::test]
    async fn test_pipeline_end_to_end() {
        let cfg = EngineConfig::default();
        let feeds = vec![feed(
            "a",
            vec![raw("A", "Lakers", &cfg), raw("B", "LA Lakers", &cfg)],
            false,
        )];
        let outcome =
            run_pipeline(&feeds, &EverythingScheduled, &cfg, &FadePredicate::none()).await;

        assert!(outcome.success);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.picks.len(), 2);
        assert_eq!(outcome.groups.len(), 1);
        assert_eq!(outcome.groups[0].capper_count, 2);
        assert_eq!(outcome.formatted.filtered_consensus.len(), 1);
        assert_eq!(outcome.daily.todays_pick_count, 2);
        assert_eq!(outcome.report.feeds_succeeded, 1);
    }

    #[tokio::test]
    async fn test_partial_feed_failure_tolerated() {
        let cfg = EngineConfig::default();
        let feeds = vec![
            feed("up", vec![raw("A", "Lakers", &cfg)], false),
            feed("down", vec![], true),
        ];
        let outcome =
            run_pipeline(&feeds, &EverythingScheduled, &cfg, &FadePredicate::none()).await;

        assert!(outcome.success);
        assert_eq!(outcome.picks.len(), 1);
        assert_eq!(outcome.report.feeds_failed, vec!["down".to_string()]);
    }

    #[tokio::test]
    async fn test_all_feeds_failed_signals_explicitly() {
        let cfg = EngineConfig::default();
        let feeds = vec![feed("down1", vec![], true), feed("down2", vec![], true)];
        let outcome =
            run_pipeline(&feeds, &EverythingScheduled, &cfg, &FadePredicate::none()).await;

        // Well-formed but explicitly unsuccessful — not "zero picks today".
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert!(outcome.picks.is_empty());
        assert!(outcome.daily.consensus.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_counted_in_report() {
        let cfg = EngineConfig::default();
        let feeds = vec![feed(
            "a",
            vec![raw("A", "Lakers", &cfg), raw("B", "Knicks", &cfg)],
            false,
        )];
        let outcome =
            run_pipeline(&feeds, &EverythingScheduled, &cfg, &FadePredicate::none()).await;

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.report.rejected_count, 1);
    }
}
