use serde::{Deserialize, Serialize};

/// Unified error type for all upstream provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Nothing in this crate retries a failed request; the caller owns retry policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials (or the calling client IP) were rejected.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., malformed domain name).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The specified domain was not found in the account.
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Domain name that was not found.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The response envelope parsed, but an expected container element is missing.
    MissingContainer {
        /// Provider that produced the error.
        provider: String,
        /// Name of the missing container (e.g. `CommandResponse`).
        container: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code (or HTTP status) from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
                | Self::DomainNotFound { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Whether the upstream answered with a structurally unexpected body.
    ///
    /// Callers use this to tell protocol violations apart from transport
    /// failures and API-level rejections.
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::MissingContainer { .. } | Self::ParseError { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' not found")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::MissingContainer {
                provider,
                container,
            } => {
                write!(f, "[{provider}] Invalid response structure: {container} not found")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "whm".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[whm] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "namecheap".to_string(),
            raw_message: Some("API Key is invalid or API access has not been enabled".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[namecheap] Invalid credentials: API Key is invalid or API access has not been enabled"
        );
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "namecheap".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[namecheap] Invalid credentials");
    }

    #[test]
    fn display_missing_container() {
        let e = ProviderError::MissingContainer {
            provider: "namecheap".to_string(),
            container: "CommandResponse".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[namecheap] Invalid response structure: CommandResponse not found"
        );
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "namecheap".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[namecheap] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_domain_not_found_without_message() {
        let e = ProviderError::DomainNotFound {
            provider: "namecheap".to_string(),
            domain: "example.com".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[namecheap] Domain 'example.com' not found");
    }

    #[test]
    fn display_unknown() {
        let e = ProviderError::Unknown {
            provider: "namecheap".to_string(),
            raw_code: Some("500000".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[namecheap] something broke");
    }

    #[test]
    fn protocol_errors_are_classified() {
        assert!(
            ProviderError::MissingContainer {
                provider: "t".into(),
                container: "Paging".into(),
            }
            .is_protocol_error()
        );
        assert!(
            ProviderError::ParseError {
                provider: "t".into(),
                detail: "bad xml".into(),
            }
            .is_protocol_error()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "refused".into(),
            }
            .is_protocol_error()
        );
    }

    #[test]
    fn serialize_tags_variant_code() {
        let e = ProviderError::RateLimited {
            provider: "namecheap".to_string(),
            retry_after: Some(60),
            raw_message: Some("too many requests".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RateLimited\""));
        assert!(json.contains("\"retry_after\":60"));
    }

    #[test]
    fn expected_errors_are_warn_level() {
        assert!(
            ProviderError::InvalidCredentials {
                provider: "t".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Timeout {
                provider: "t".into(),
                detail: "30s".into(),
            }
            .is_expected()
        );
    }
}
