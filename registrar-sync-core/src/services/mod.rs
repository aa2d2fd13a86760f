//! 业务逻辑服务层

mod collector_service;
mod dns_host_service;
mod submission_service;
mod sync_service;
mod token_verifier;

pub use collector_service::{CollectorService, PAGE_SIZE};
pub use dns_host_service::DnsHostService;
pub use submission_service::SubmissionService;
pub use sync_service::{SyncService, DRY_RUN_MESSAGE};
pub use token_verifier::{Claims, TokenVerifier};

use std::sync::Arc;

use registrar_sync_provider::{RegistrarProvider, UsageProvider};

use crate::traits::LedgerClient;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入上游客户端和平台特定的实现。
pub struct ServiceContext {
    /// 域名注册商客户端
    pub registrar: Arc<dyn RegistrarProvider>,
    /// 带宽用量客户端
    pub usage_provider: Arc<dyn UsageProvider>,
    /// 下游记账服务器客户端
    pub ledger: Arc<dyn LedgerClient>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        registrar: Arc<dyn RegistrarProvider>,
        usage_provider: Arc<dyn UsageProvider>,
        ledger: Arc<dyn LedgerClient>,
    ) -> Self {
        Self {
            registrar,
            usage_provider,
            ledger,
        }
    }
}
