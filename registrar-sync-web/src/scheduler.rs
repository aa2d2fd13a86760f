//! 定时同步
//!
//! One run at startup, then one every [`SYNC_PERIOD`]. A failed run is
//! logged and never stops the loop.

use std::sync::Arc;
use std::time::Duration;

use registrar_sync_core::services::SyncService;
use registrar_sync_core::types::RunSummary;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// 同步周期：6 小时
pub const SYNC_PERIOD_HOURS: u64 = 6;
pub const SYNC_PERIOD: Duration = Duration::from_secs(SYNC_PERIOD_HOURS * 60 * 60);

/// Execute one sync and log the result; returns the summary on success.
pub async fn run_once(sync: &SyncService, trigger: &str) -> Option<RunSummary> {
    tracing::info!("Sync started ({trigger})");
    match sync.run().await {
        Ok(summary) => {
            tracing::info!(
                "Sync finished ({trigger}): {} [{:?}]",
                summary.message,
                summary.outcome
            );
            Some(summary)
        }
        Err(e) => {
            tracing::error!("Sync failed ({trigger}): {e}");
            None
        }
    }
}

/// Spawn the periodic loop. The first tick fires one full `period` after spawning.
pub fn spawn(sync: Arc<SyncService>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            run_once(&sync, "scheduled").await;
        }
    })
}
