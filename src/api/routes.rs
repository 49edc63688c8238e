//! API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<ApiState>`; the
//! refresh loop swaps in a fresh pipeline snapshot after every run.
//!
//! Boundary rules (callers always get a well-formed shape):
//! - Negative pagination values are contract violations → typed 400.
//! - An unrecognized sport filter degrades to an empty result, not an error.
//! - No snapshot yet, or a failed run, reads as `success: false` with a
//!   short diagnostic — never a thrown fault.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{ApiConfig, EngineConfig};
use crate::engine::PipelineOutcome;
use crate::format::tier;
use crate::types::{
    DailyBetsOutput, FirepickError, NormalizedPick, Sport, TieredGroup,
};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct ApiState {
    pub snapshot: RwLock<Option<PipelineOutcome>>,
    pub engine: EngineConfig,
    pub api: ApiConfig,
}

impl ApiState {
    pub fn new(engine: EngineConfig, api: ApiConfig) -> Self {
        Self {
            snapshot: RwLock::new(None),
            engine,
            api,
        }
    }

    /// Replace the served snapshot with a fresh pipeline outcome.
    pub async fn publish(&self, outcome: PipelineOutcome) {
        *self.snapshot.write().await = Some(outcome);
    }
}

pub type AppState = Arc<ApiState>;

// ---------------------------------------------------------------------------
// Query & response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct ConsensusQuery {
    /// Exact sport name or "ALL".
    pub sport: Option<String>,
    pub min_cappers: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PicksQuery {
    pub sport: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ConsensusResponse {
    pub success: bool,
    pub error: Option<String>,
    pub date: Option<NaiveDate>,
    pub generated_at: Option<DateTime<Utc>>,
    /// Group count before any pagination by the caller.
    pub total: usize,
    pub groups: Vec<TieredGroup>,
}

#[derive(Debug, Serialize)]
pub struct PicksResponse {
    pub success: bool,
    pub error: Option<String>,
    /// Pick count after filtering, before pagination.
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub picks: Vec<NormalizedPick>,
    /// Distinct sports observed today (for filter UIs).
    pub sports: Vec<Sport>,
    /// Distinct capper names observed today (for filter UIs).
    pub cappers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyBetsResponse {
    pub success: bool,
    pub error: Option<String>,
    pub daily: DailyBetsOutput,
    pub degraded_sports: Vec<Sport>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bad_request(err: FirepickError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Interpret the sport filter: `None`/"ALL" matches everything, a known
/// sport matches exactly, anything else matches nothing.
enum SportFilter {
    All,
    One(Sport),
    Nothing,
}

fn sport_filter(raw: Option<&str>) -> SportFilter {
    match raw {
        None => SportFilter::All,
        Some(s) if s.trim().eq_ignore_ascii_case("all") => SportFilter::All,
        Some(s) => match Sport::from_str(s) {
            Ok(sport) => SportFilter::One(sport),
            Err(_) => SportFilter::Nothing,
        },
    }
}

impl SportFilter {
    fn matches(&self, sport: Sport) -> bool {
        match self {
            SportFilter::All => true,
            SportFilter::One(s) => *s == sport,
            SportFilter::Nothing => false,
        }
    }
}

const NO_DATA: &str = "No pipeline run has completed yet";

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/consensus
pub async fn get_consensus(
    State(state): State<AppState>,
    Query(query): Query<ConsensusQuery>,
) -> Response {
    if let Some(m) = query.min_cappers {
        if m < 0 {
            return bad_request(FirepickError::InvalidQuery(format!(
                "min_cappers must be >= 0, got {m}"
            )));
        }
    }

    let snapshot = state.snapshot.read().await;
    let Some(snap) = snapshot.as_ref() else {
        return Json(ConsensusResponse {
            success: false,
            error: Some(NO_DATA.to_string()),
            date: None,
            generated_at: None,
            total: 0,
            groups: Vec::new(),
        })
        .into_response();
    };

    let min = query
        .min_cappers
        .map(|m| m as usize)
        .unwrap_or(state.engine.min_cappers);
    let filter = sport_filter(query.sport.as_deref());

    let groups: Vec<TieredGroup> = snap
        .groups
        .iter()
        .filter(|g| g.capper_count >= min && filter.matches(g.sport))
        .map(|g| TieredGroup {
            tier: tier(g.capper_count),
            group: g.clone(),
        })
        .collect();

    Json(ConsensusResponse {
        success: snap.success,
        error: snap.error.clone(),
        date: Some(snap.date),
        generated_at: Some(snap.generated_at),
        total: groups.len(),
        groups,
    })
    .into_response()
}

/// GET /api/picks
pub async fn get_picks(
    State(state): State<AppState>,
    Query(query): Query<PicksQuery>,
) -> Response {
    if let Some(o) = query.offset {
        if o < 0 {
            return bad_request(FirepickError::InvalidQuery(format!(
                "offset must be >= 0, got {o}"
            )));
        }
    }
    if let Some(l) = query.limit {
        if l < 0 {
            return bad_request(FirepickError::InvalidQuery(format!(
                "limit must be >= 0, got {l}"
            )));
        }
    }

    let offset = query.offset.unwrap_or(0) as usize;
    let limit = (query.limit.map(|l| l as usize))
        .unwrap_or(state.api.default_page_size)
        .min(state.api.max_page_size);

    let snapshot = state.snapshot.read().await;
    let Some(snap) = snapshot.as_ref() else {
        return Json(PicksResponse {
            success: false,
            error: Some(NO_DATA.to_string()),
            total: 0,
            offset,
            limit,
            picks: Vec::new(),
            sports: Vec::new(),
            cappers: Vec::new(),
        })
        .into_response();
    };

    let filter = sport_filter(query.sport.as_deref());
    let matching: Vec<&NormalizedPick> = snap
        .picks
        .iter()
        .filter(|p| filter.matches(p.sport))
        .collect();
    let total = matching.len();
    let picks: Vec<NormalizedPick> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    // Distinct sets over the full snapshot, for building filter UIs.
    let sports: Vec<Sport> = snap
        .picks
        .iter()
        .map(|p| p.sport)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut seen = BTreeSet::new();
    let mut cappers: Vec<String> = Vec::new();
    for pick in &snap.picks {
        if seen.insert(pick.capper_key()) {
            cappers.push(pick.capper.clone());
        }
    }
    cappers.sort();

    Json(PicksResponse {
        success: snap.success,
        error: snap.error.clone(),
        total,
        offset,
        limit,
        picks,
        sports,
        cappers,
    })
    .into_response()
}

/// GET /api/daily-bets
pub async fn get_daily_bets(State(state): State<AppState>) -> Response {
    let snapshot = state.snapshot.read().await;
    let Some(snap) = snapshot.as_ref() else {
        return Json(DailyBetsResponse {
            success: false,
            error: Some(NO_DATA.to_string()),
            daily: DailyBetsOutput::default(),
            degraded_sports: Vec::new(),
        })
        .into_response();
    };

    Json(DailyBetsResponse {
        success: snap.success,
        error: snap.error.clone(),
        daily: snap.daily.clone(),
        degraded_sports: snap.degraded_sports.clone(),
    })
    .into_response()
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
