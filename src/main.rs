//! FIREPICK — Sports Capper Consensus Engine
//!
//! Entry point. Loads configuration, initialises structured logging,
//! wires up feeds and the schedule provider, starts the JSON API, and
//! runs the periodic refresh loop with graceful shutdown.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use firepick::api::routes::ApiState;
use firepick::api::spawn_api;
use firepick::config::AppConfig;
use firepick::engine::{run_pipeline, PipelineOutcome};
use firepick::feeds::json_feed::JsonFeedClient;
use firepick::feeds::PickFeed;
use firepick::format::FadePredicate;
use firepick::schedule::scoreboard::ScoreboardClient;

const BANNER: &str = r#"
 _____ ___ ____  _____ ____ ___ ____ _  __
|  ___|_ _|  _ \| ____|  _ \_ _/ ___| |/ /
| |_   | || |_) |  _| | |_) | | |   | ' /
|  _|  | ||  _ <| |___|  __/| | |___| . \
|_|   |___|_| \_\_____|_|  |___\____|_|\_\

  Sports Capper Consensus Engine
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        service = %cfg.service.name,
        refresh_interval_secs = cfg.service.refresh_interval_secs,
        min_cappers = cfg.engine.min_cappers,
        feeds = cfg.feeds.len(),
        "FIREPICK starting up"
    );

    // -- Initialise components -------------------------------------------

    let mut feeds: Vec<Box<dyn PickFeed>> = Vec::new();
    for feed_cfg in cfg.feeds.iter().filter(|f| f.enabled) {
        feeds.push(Box::new(JsonFeedClient::new(feed_cfg)?));
        info!(feed = %feed_cfg.name, "Feed enabled");
    }
    if feeds.is_empty() {
        warn!("No feeds enabled — every run will report failure");
    }

    let provider = ScoreboardClient::new(&cfg.schedule)?;

    // The contrarian rule is an injected policy; without a public betting
    // signal wired in, the default selects nothing.
    let fade = FadePredicate::none();

    // -- API server ------------------------------------------------------

    let state = Arc::new(ApiState::new(cfg.engine.clone(), cfg.api.clone()));
    if cfg.api.enabled {
        spawn_api(state.clone(), cfg.api.port)?;
    }

    // -- Refresh loop ----------------------------------------------------

    let mut interval =
        tokio::time::interval(Duration::from_secs(cfg.service.refresh_interval_secs));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(
        interval_secs = cfg.service.refresh_interval_secs,
        "Entering refresh loop. Press Ctrl+C to stop."
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let outcome = run_pipeline(&feeds, &provider, &cfg.engine, &fade).await;
                log_run(&outcome);
                state.publish(outcome).await;
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    info!("FIREPICK shut down cleanly.");
    Ok(())
}

/// Log a human-readable run summary.
fn log_run(outcome: &PipelineOutcome) {
    info!(
        run_id = %outcome.report.run_id,
        success = outcome.success,
        date = %outcome.date,
        picks = outcome.picks.len(),
        rejected = outcome.report.rejected_count,
        groups = outcome.groups.len(),
        top = outcome.formatted.top_overall.len(),
        degraded = outcome.degraded_sports.len(),
        "Refresh complete"
    );
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("firepick=info"));

    let json_logging = std::env::var("FIREPICK_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
