//! Live-schedule providers.
//!
//! Defines the `ScheduleProvider` trait consumed by the schedule filter,
//! and the scoreboard HTTP implementation. Providers are treated as
//! unreliable: callers decide per configured policy what a failed fetch
//! means for that sport's picks.

pub mod filter;
pub mod scoreboard;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{ScheduleEntry, Sport};

/// Abstraction over external live-schedule sources.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// Games for one sport on one reporting day.
    async fn todays_games(&self, sport: Sport, date: NaiveDate) -> Result<Vec<ScheduleEntry>>;

    /// Provider name for logging and identification.
    fn name(&self) -> &str;
}
