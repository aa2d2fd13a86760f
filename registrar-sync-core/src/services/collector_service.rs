//! 域名列表分页采集服务

use std::sync::Arc;

use registrar_sync_provider::{BalanceSnapshot, DomainPage, DomainRecord};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::CollectionResult;

/// 每页记录数（注册商允许的最大值）
pub const PAGE_SIZE: u32 = 100;

/// 分页采集服务
///
/// Page 1 reports `TotalItems`; pages `2..=ceil(total / PAGE_SIZE)` are then
/// fetched one after another and concatenated in page order. Any page
/// failure fails the whole collection.
pub struct CollectorService {
    ctx: Arc<ServiceContext>,
}

impl CollectorService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 采集全部域名和余额
    ///
    /// Never fails: errors are folded into an `error` result with no domains.
    /// A balance failure also discards the already collected domains.
    pub async fn collect(&self) -> CollectionResult {
        let domains = match self.collect_domains().await {
            Ok(domains) => domains,
            Err(e) => return CollectionResult::failed(e.to_string()),
        };

        match self.fetch_balances().await {
            Ok(balances) => {
                log::info!("Collected {} domains", domains.len());
                CollectionResult::ok(domains, balances)
            }
            Err(e) => {
                log_failure("Balance fetch failed", &e);
                CollectionResult::failed(e.to_string())
            }
        }
    }

    /// 分页拉取全部域名
    pub async fn collect_domains(&self) -> CoreResult<Vec<DomainRecord>> {
        let first = self.fetch_page(1).await?;
        // 无分页信息按 0 处理，只返回第一页
        let total_items = first.total_items.unwrap_or(0);
        let total_pages = total_items.div_ceil(PAGE_SIZE);

        let mut domains = first.domains;
        for page in 2..=total_pages {
            let next = self.fetch_page(page).await?;
            if let Some(reported) = next.total_items {
                if reported != total_items {
                    let err = CoreError::UpstreamProtocol {
                        page: Some(page),
                        detail: format!("TotalItems changed from {total_items} to {reported}"),
                    };
                    log_failure("Domain collection failed", &err);
                    return Err(err);
                }
            }
            domains.extend(next.domains);
        }

        log::debug!(
            "Domain list: {} records over {} pages (TotalItems {total_items})",
            domains.len(),
            total_pages.max(1)
        );
        Ok(domains)
    }

    /// 获取账户余额
    pub async fn fetch_balances(&self) -> CoreResult<BalanceSnapshot> {
        self.ctx.registrar.get_balances().await.map_err(|e| {
            if e.is_protocol_error() {
                CoreError::UpstreamProtocol {
                    page: None,
                    detail: e.to_string(),
                }
            } else {
                CoreError::Provider(e)
            }
        })
    }

    async fn fetch_page(&self, page: u32) -> CoreResult<DomainPage> {
        self.ctx
            .registrar
            .list_domains_page(page, PAGE_SIZE)
            .await
            .map_err(|e| {
                let err = CoreError::from_provider_on_page(e, page);
                log_failure(&format!("Domain list page {page} failed"), &err);
                err
            })
    }
}

fn log_failure(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
