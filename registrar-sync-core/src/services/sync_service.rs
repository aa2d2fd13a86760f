//! 同步编排服务
//!
//! Composes collection, usage fetch and submission for one run. Runs are not
//! synchronised with each other: overlapping runs both submit.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{CollectorService, ServiceContext, SubmissionService};
use crate::types::{CollectionResult, RunMode, RunSummary, SyncSettings, UsageSnapshot};

/// Dry-run result message
pub const DRY_RUN_MESSAGE: &str = "Dry run mode enabled";

/// 同步编排服务
pub struct SyncService {
    ctx: Arc<ServiceContext>,
    collector: CollectorService,
    submission: SubmissionService,
    mode: RunMode,
}

impl SyncService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, settings: SyncSettings) -> Self {
        let mode = settings.mode;
        Self {
            collector: CollectorService::new(Arc::clone(&ctx)),
            submission: SubmissionService::new(Arc::clone(&ctx), settings),
            ctx,
            mode,
        }
    }

    /// 以配置的模式运行一次
    pub async fn run(&self) -> CoreResult<RunSummary> {
        self.run_with_mode(self.mode).await
    }

    /// 以指定模式运行一次
    pub async fn run_with_mode(&self, mode: RunMode) -> CoreResult<RunSummary> {
        log::info!("Sync run started ({mode:?})");

        let summary = match mode {
            RunMode::DryRun => {
                let usage = self.ctx.usage_provider.fetch_usage().await;
                RunSummary {
                    mode,
                    domains_collected: 0,
                    collection_status: None,
                    collection_message: None,
                    usage_available: usage.is_some(),
                    outcome: None,
                    message: DRY_RUN_MESSAGE.to_string(),
                }
            }
            RunMode::SkipCollection => {
                let usage = self.ctx.usage_provider.fetch_usage().await;
                self.submit(mode, CollectionResult::empty(), usage).await?
            }
            RunMode::Normal => {
                let (collection, usage) = tokio::join!(
                    self.collector.collect(),
                    self.ctx.usage_provider.fetch_usage()
                );
                self.submit(mode, collection, usage).await?
            }
        };

        log::info!("Sync run finished: {}", summary.message);
        Ok(summary)
    }

    async fn submit(
        &self,
        mode: RunMode,
        collection: CollectionResult,
        usage: Option<UsageSnapshot>,
    ) -> CoreResult<RunSummary> {
        if !collection.is_ok() {
            log::warn!(
                "Collection failed, submitting without domains: {}",
                collection.message.as_deref().unwrap_or("unknown error")
            );
        }
        let usage_available = usage.is_some();

        let outcome = self
            .submission
            .submit(&collection.domains, collection.balances.as_ref(), usage)
            .await?;

        Ok(RunSummary {
            mode,
            domains_collected: collection.domains.len(),
            collection_status: Some(collection.status),
            message: format!("Fetched {} domains", collection.domains.len()),
            collection_message: collection.message,
            usage_available,
            outcome: Some(outcome),
        })
    }
}
