use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    BalanceSnapshot, DomainPage, HostRecord, HostRecordInput, SetHostsResult, UsageSnapshot,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：缺少预期的响应容器
    fn missing_container(&self, container: &str) -> ProviderError {
        ProviderError::MissingContainer {
            provider: self.provider_name().to_string(),
            container: container.to_string(),
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 域名注册商 Trait
///
/// One call per upstream request. Pagination across pages is the caller's job;
/// this trait only knows how to fetch a single page.
#[async_trait]
pub trait RegistrarProvider: Send + Sync {
    /// 获取单页域名列表
    ///
    /// `page` is 1-indexed. A page without a record list yields an empty
    /// `domains` vector; a response without the command container is a
    /// [`ProviderError::MissingContainer`].
    async fn list_domains_page(&self, page: u32, page_size: u32) -> Result<DomainPage>;

    /// 获取账户余额
    async fn get_balances(&self) -> Result<BalanceSnapshot>;

    /// 获取域名的 DNS 主机记录
    async fn get_hosts(&self, sld: &str, tld: &str) -> Result<Vec<HostRecord>>;

    /// 整体替换域名的 DNS 主机记录
    async fn set_hosts(
        &self,
        sld: &str,
        tld: &str,
        records: &[HostRecordInput],
    ) -> Result<SetHostsResult>;
}

/// 带宽/用量 Provider Trait
///
/// Best-effort: implementations log failures and return `None` instead of an error.
#[async_trait]
pub trait UsageProvider: Send + Sync {
    /// 获取用量快照，失败时返回 `None`
    async fn fetch_usage(&self) -> Option<UsageSnapshot>;
}
