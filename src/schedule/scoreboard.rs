//! ESPN-style scoreboard client.
//!
//! Fetches today's games per league from the public site API and resolves
//! competitor display names through the canonicalizer so the filter
//! compares the same identifiers on both sides. Entries whose teams don't
//! canonicalize are skipped — those gaps show up in the filter's rejected
//! list via the picks that fail to match.
//!
//! Endpoint shape: `{base}/{league}/scoreboard?dates=YYYYMMDD`
//! e.g. `https://site.api.espn.com/apis/site/v2/sports/basketball/nba/scoreboard`
//!
//! Responses are cached per `(sport, reporting day)` with a short TTL.
//! The day is part of the key, so a cached answer can never leak across a
//! reporting-day boundary regardless of TTL.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::ScheduleProvider;
use crate::canon;
use crate::config::ScheduleConfig;
use crate::types::{CanonTeam, GameStatus, ScheduleEntry, Sport};

const PROVIDER_NAME: &str = "scoreboard";

/// League path segment per sport on the scoreboard API.
fn league_path(sport: Sport) -> Option<&'static str> {
    match sport {
        Sport::Nfl => Some("football/nfl"),
        Sport::Nba => Some("basketball/nba"),
        Sport::Mlb => Some("baseball/mlb"),
        Sport::Nhl => Some("hockey/nhl"),
        Sport::Ncaaf => Some("football/college-football"),
        Sport::Ncaab => Some("basketball/mens-college-basketball"),
        Sport::Other => None,
    }
}

// ---------------------------------------------------------------------------
// API response types (scoreboard JSON → Rust)
// ---------------------------------------------------------------------------

/// We only deserialize the fields we need; everything else is ignored.
#[derive(Debug, Deserialize)]
struct ScoreboardResponse {
    #[serde(default)]
    events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Deserialize)]
struct ScoreboardEvent {
    #[serde(default)]
    date: String,
    #[serde(default)]
    competitions: Vec<Competition>,
    #[serde(default)]
    status: Option<EventStatus>,
}

#[derive(Debug, Deserialize)]
struct Competition {
    #[serde(default)]
    competitors: Vec<Competitor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Competitor {
    #[serde(default)]
    home_away: String,
    team: Option<CompetitorTeam>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitorTeam {
    #[serde(default)]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct EventStatus {
    #[serde(rename = "type")]
    kind: Option<StatusType>,
}

#[derive(Debug, Deserialize)]
struct StatusType {
    /// "pre" | "in" | "post"
    #[serde(default)]
    state: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

struct CacheSlot {
    fetched_at: Instant,
    entries: Vec<ScheduleEntry>,
}

/// Scoreboard HTTP client with a short-TTL per-(sport, day) cache.
pub struct ScoreboardClient {
    http: Client,
    base_url: String,
    cache_ttl: Duration,
    cache: RwLock<HashMap<(Sport, NaiveDate), CacheSlot>>,
}

impl ScoreboardClient {
    pub fn new(cfg: &ScheduleConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent("FIREPICK/0.1.0")
            .build()
            .context("Failed to build scoreboard HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            cache_ttl: Duration::from_secs(cfg.cache_ttl_secs),
            cache: RwLock::new(HashMap::new()),
        })
    }

    async fn cached(&self, sport: Sport, date: NaiveDate) -> Option<Vec<ScheduleEntry>> {
        let cache = self.cache.read().await;
        cache
            .get(&(sport, date))
            .filter(|slot| slot.fetched_at.elapsed() < self.cache_ttl)
            .map(|slot| slot.entries.clone())
    }

    async fn store(&self, sport: Sport, date: NaiveDate, entries: Vec<ScheduleEntry>) {
        let mut cache = self.cache.write().await;
        cache.insert(
            (sport, date),
            CacheSlot {
                fetched_at: Instant::now(),
                entries,
            },
        );
    }

    async fn fetch(&self, sport: Sport, date: NaiveDate) -> Result<Vec<ScheduleEntry>> {
        let Some(league) = league_path(sport) else {
            bail!("No scoreboard league for {sport}");
        };

        let url = format!(
            "{}/{}/scoreboard?dates={}",
            self.base_url,
            league,
            urlencoding::encode(&date.format("%Y%m%d").to_string()),
        );
        debug!(%sport, %url, "Fetching scoreboard");

        let response: ScoreboardResponse = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Scoreboard request failed for {sport}"))?
            .error_for_status()
            .with_context(|| format!("Scoreboard returned error status for {sport}"))?
            .json()
            .await
            .with_context(|| format!("Scoreboard response malformed for {sport}"))?;

        Ok(entries_from_response(sport, response, date))
    }
}

/// Convert a scoreboard payload into schedule entries. Events whose teams
/// can't be canonicalized (or that lack two competitors) are skipped.
fn entries_from_response(
    sport: Sport,
    response: ScoreboardResponse,
    date: NaiveDate,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();

    for event in response.events {
        let Some(competition) = event.competitions.first() else {
            continue;
        };

        let mut home = None;
        let mut away = None;
        for competitor in &competition.competitors {
            let Some(team) = &competitor.team else { continue };
            let canon = canon::canonicalize_team(sport, &team.display_name);
            match (&canon, competitor.home_away.as_str()) {
                (CanonTeam::Known(id), "home") => home = Some(id.clone()),
                (CanonTeam::Known(id), "away") => away = Some(id.clone()),
                (CanonTeam::Unknown(_), _) => {
                    debug!(%sport, name = %team.display_name, "Scoreboard team not in alias table");
                }
                _ => {}
            }
        }

        let (Some(home), Some(away)) = (home, away) else {
            continue;
        };

        let status = match event.status.and_then(|s| s.kind).map(|k| k.state) {
            Some(state) if state == "in" => GameStatus::InProgress,
            Some(state) if state == "post" => GameStatus::Final,
            _ => GameStatus::Scheduled,
        };

        let start = parse_event_time(&event.date)
            .unwrap_or_else(|| midnight_utc(date));

        entries.push(ScheduleEntry {
            sport,
            home,
            away,
            start,
            status,
        });
    }

    entries
}

/// The scoreboard emits minute-resolution UTC timestamps ("...T23:30Z");
/// accept full RFC 3339 too.
fn parse_event_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}

#[async_trait]
impl ScheduleProvider for ScoreboardClient {
    async fn todays_games(&self, sport: Sport, date: NaiveDate) -> Result<Vec<ScheduleEntry>> {
        if let Some(entries) = self.cached(sport, date).await {
            debug!(%sport, %date, "Scoreboard cache hit");
            return Ok(entries);
        }

        let entries = self.fetch(sport, date).await?;
        self.store(sport, date, entries.clone()).await;
        Ok(entries)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
