//! Upstream pick feeds.
//!
//! Defines the `PickFeed` trait and the JSON HTTP feed implementation.
//! Feeds are independent and unreliable: the engine proceeds with
//! whatever sources returned when one fails.

pub mod json_feed;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::RawPick;

/// Abstraction over upstream pick sources.
#[async_trait]
pub trait PickFeed: Send + Sync {
    /// Fetch the feed's current batch of raw picks.
    async fn fetch_picks(&self) -> Result<Vec<RawPick>>;

    /// Feed name for logging and the `RawPick::source` field.
    fn name(&self) -> &str;
}
