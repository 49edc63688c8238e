//! Generic JSON pick-feed client.
//!
//! Upstream feeds are dynamic JSON, so records are modeled as a tagged
//! union over the source shapes we actually know, validated at this
//! boundary. Anything that doesn't match a known shape is dropped and
//! counted here — free-form objects never travel downstream.
//!
//! Auth: optional `x-api-key` header, key resolved from the env var named
//! in the feed's config.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::PickFeed;
use crate::config::FeedConfig;
use crate::types::RawPick;

// ---------------------------------------------------------------------------
// Feed record shapes (feed JSON → Rust)
// ---------------------------------------------------------------------------

/// Known upstream record shapes, discriminated by the `format` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
enum FeedRecord {
    /// The structured shape emitted by API-native feeds.
    Standard(StandardRecord),
    /// The looser shape produced by the HTML-scraping collectors.
    Scraped(ScrapedRecord),
}

#[derive(Debug, Deserialize)]
struct StandardRecord {
    capper: String,
    sport: String,
    side: String,
    bet: String,
    #[serde(default)]
    bet_type: Option<String>,
    #[serde(default)]
    matchup: Option<String>,
    event_time: String,
}

#[derive(Debug, Deserialize)]
struct ScrapedRecord {
    author: String,
    league: String,
    selection: String,
    odds_text: String,
    #[serde(default)]
    game: Option<String>,
    posted_at: String,
}

impl FeedRecord {
    /// Validate and convert into the common `RawPick` shape.
    /// Returns `None` for records missing required content.
    fn into_raw(self, source: &str) -> Option<RawPick> {
        let pick = match self {
            FeedRecord::Standard(r) => RawPick {
                capper: r.capper,
                sport: r.sport,
                side: r.side,
                bet: r.bet,
                bet_type_hint: r.bet_type,
                matchup: r.matchup,
                event_time: r.event_time,
                source: source.to_string(),
            },
            FeedRecord::Scraped(r) => RawPick {
                capper: r.author,
                sport: r.league,
                side: r.selection,
                bet: r.odds_text,
                bet_type_hint: None,
                matchup: r.game,
                event_time: r.posted_at,
                source: source.to_string(),
            },
        };

        if pick.capper.trim().is_empty()
            || pick.side.trim().is_empty()
            || pick.event_time.trim().is_empty()
        {
            return None;
        }
        Some(pick)
    }
}

/// Parse a feed's JSON array element-by-element so one malformed record
/// never aborts the batch.
fn parse_records(feed: &str, values: Vec<serde_json::Value>) -> Vec<RawPick> {
    let total = values.len();
    let mut picks = Vec::with_capacity(total);
    let mut dropped = 0usize;

    for value in values {
        match serde_json::from_value::<FeedRecord>(value) {
            Ok(record) => match record.into_raw(feed) {
                Some(pick) => picks.push(pick),
                None => dropped += 1,
            },
            Err(e) => {
                debug!(feed, error = %e, "Unrecognized feed record shape");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        warn!(feed, dropped, total, "Dropped unparseable feed records");
    }
    picks
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for one configured JSON feed.
pub struct JsonFeedClient {
    http: Client,
    name: String,
    url: String,
    api_key: Option<String>,
}

impl JsonFeedClient {
    pub fn new(cfg: &FeedConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent("FIREPICK/0.1.0")
            .build()
            .with_context(|| format!("Failed to build HTTP client for feed {}", cfg.name))?;

        let api_key = cfg
            .api_key_env
            .as_deref()
            .and_then(|env| std::env::var(env).ok());

        Ok(Self {
            http,
            name: cfg.name.clone(),
            url: cfg.url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl PickFeed for JsonFeedClient {
    async fn fetch_picks(&self) -> Result<Vec<RawPick>> {
        let mut request = self.http.get(&self.url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let values: Vec<serde_json::Value> = request
            .send()
            .await
            .with_context(|| format!("Feed request failed: {}", self.name))?
            .error_for_status()
            .with_context(|| format!("Feed returned error status: {}", self.name))?
            .json()
            .await
            .with_context(|| format!("Feed response malformed: {}", self.name))?;

        let picks = parse_records(&self.name, values);
        debug!(feed = %self.name, count = picks.len(), "Feed fetched");
        Ok(picks)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
