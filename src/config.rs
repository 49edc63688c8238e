//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every behavioral knob (thresholds, tolerances, fail policy, pagination
//! defaults) lives here rather than as an ambient constant, so each
//! pipeline invocation is reproducible from its configuration alone.
//! Secrets (API keys) are referenced by env-var name in the config and
//! resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    /// Seconds between pipeline refreshes.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            name: default_service_name(),
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

/// Behavior of the consensus pipeline itself.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Fixed UTC offset (hours) of the reporting timezone. The reporting
    /// day boundary is 00:00 at this offset, year-round — no DST table.
    #[serde(default = "default_reporting_offset")]
    pub reporting_offset_hours: i32,
    /// Minimum distinct cappers for a group to appear in filtered output.
    #[serde(default = "default_min_cappers")]
    pub min_cappers: usize,
    /// Maximum groups in the top-overall ranked list.
    #[serde(default = "default_top_overall_limit")]
    pub top_overall_limit: usize,
    /// What the schedule filter does for a sport whose schedule fetch failed.
    #[serde(default)]
    pub schedule_policy: SchedulePolicy,
    /// Line-compatibility tolerances for merging picks into one group.
    #[serde(default)]
    pub line_tolerance: LineTolerance,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            reporting_offset_hours: default_reporting_offset(),
            min_cappers: default_min_cappers(),
            top_overall_limit: default_top_overall_limit(),
            schedule_policy: SchedulePolicy::default(),
            line_tolerance: LineTolerance::default(),
        }
    }
}

/// Failure policy for the schedule filter (per sport).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePolicy {
    /// Pass a sport's picks through unfiltered when its schedule could not
    /// be retrieved (degrades quality instead of zeroing results).
    #[default]
    FailOpen,
    /// Reject a sport's picks when its schedule could not be retrieved.
    FailClosed,
}

/// Named tolerance for treating two different lines as the same wager.
/// Two picks merge when both lines are absent, or both are present and
/// differ by at most the tolerance for their bet type.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LineTolerance {
    #[serde(default = "default_tolerance")]
    pub spread: Decimal,
    #[serde(default = "default_tolerance")]
    pub total: Decimal,
}

impl Default for LineTolerance {
    fn default() -> Self {
        LineTolerance {
            spread: default_tolerance(),
            total: default_tolerance(),
        }
    }
}

/// One upstream pick feed.
#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Env var holding this feed's API key, if it needs one.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// Schedule provider (live scoreboard) settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "default_scoreboard_url")]
    pub base_url: String,
    #[serde(default = "default_schedule_timeout")]
    pub timeout_secs: u64,
    /// TTL of the per-(sport, day) schedule cache. Short by design; the
    /// cache key includes the reporting day, so an entry can never serve
    /// across day boundaries regardless of TTL.
    #[serde(default = "default_schedule_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            base_url: default_scoreboard_url(),
            timeout_secs: default_schedule_timeout(),
            cache_ttl_secs: default_schedule_cache_ttl(),
        }
    }
}

/// JSON API server settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_api_port")]
    pub port: u16,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            enabled: true,
            port: default_api_port(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

// -- serde defaults ---------------------------------------------------------

fn default_service_name() -> String {
    "FIREPICK-001".to_string()
}
fn default_refresh_interval() -> u64 {
    600
}
fn default_reporting_offset() -> i32 {
    -5
}
fn default_min_cappers() -> usize {
    2
}
fn default_top_overall_limit() -> usize {
    10
}
fn default_tolerance() -> Decimal {
    Decimal::ZERO
}
fn default_true() -> bool {
    true
}
fn default_scoreboard_url() -> String {
    "https://site.api.espn.com/apis/site/v2/sports".to_string()
}
fn default_schedule_timeout() -> u64 {
    10
}
fn default_schedule_cache_ttl() -> u64 {
    300
}
fn default_api_port() -> u16 {
    8080
}
fn default_page_size() -> usize {
    50
}
fn default_max_page_size() -> usize {
    200
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.engine.min_cappers, 2);
        assert_eq!(cfg.engine.top_overall_limit, 10);
        assert_eq!(cfg.engine.reporting_offset_hours, -5);
        assert_eq!(cfg.engine.schedule_policy, SchedulePolicy::FailOpen);
        assert_eq!(cfg.engine.line_tolerance.spread, Decimal::ZERO);
        assert_eq!(cfg.api.default_page_size, 50);
        assert!(cfg.feeds.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.service.refresh_interval_secs, 600);
        assert_eq!(cfg.schedule.cache_ttl_secs, 300);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            [service]
            name = "FIREPICK-TEST"
            refresh_interval_secs = 120

            [engine]
            reporting_offset_hours = -6
            min_cappers = 3
            top_overall_limit = 5
            schedule_policy = "fail_closed"

            [engine.line_tolerance]
            spread = 0.5
            total = 1.0

            [[feeds]]
            name = "sharpline"
            url = "https://feeds.example.com/sharpline"

            [[feeds]]
            name = "scraped"
            url = "https://feeds.example.com/scraped"
            enabled = false
            api_key_env = "SCRAPED_FEED_KEY"

            [schedule]
            cache_ttl_secs = 60

            [api]
            port = 9090
        "#;
        let cfg: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.service.name, "FIREPICK-TEST");
        assert_eq!(cfg.engine.min_cappers, 3);
        assert_eq!(cfg.engine.schedule_policy, SchedulePolicy::FailClosed);
        assert_eq!(cfg.engine.line_tolerance.spread, dec!(0.5));
        assert_eq!(cfg.engine.line_tolerance.total, dec!(1.0));
        assert_eq!(cfg.feeds.len(), 2);
        assert!(cfg.feeds[0].enabled);
        assert!(!cfg.feeds[1].enabled);
        assert_eq!(cfg.feeds[1].api_key_env.as_deref(), Some("SCRAPED_FEED_KEY"));
        assert_eq!(cfg.schedule.cache_ttl_secs, 60);
        assert_eq!(cfg.api.port, 9090);
    }

    #[test]
    fn test_load_config_file() {
        // This test requires config.toml to be in the working directory.
        let result = AppConfig::load("config.toml");
        if let Ok(cfg) = result {
            assert!(cfg.engine.min_cappers >= 1);
            assert!(cfg.api.max_page_size >= cfg.api.default_page_size);
        }
        // If config.toml isn't found, that's acceptable in some test environments
    }
}
