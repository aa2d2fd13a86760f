//! Namecheap 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::NamecheapProvider;

/// Namecheap error number mapping
/// Reference: <https://www.namecheap.com/support/api/error-codes/>
impl ProviderErrorMapper for NamecheapProvider {
    fn provider_name(&self) -> &'static str {
        "namecheap"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误（用户/密钥/客户端 IP） ============
            Some("1010101" | "1010102" | "1011101" | "1011102" | "1011150" | "1017150") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 域名不存在 / 不属于当前账户 ============
            Some("2019166" | "2016166") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 权限不足 ============
            Some("2030166" | "4022288") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 参数错误 ============
            Some("2010323" | "2011170" | "2015182" | "2050900") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "request".to_string(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}
