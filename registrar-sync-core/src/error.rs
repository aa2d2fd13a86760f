//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use registrar_sync_provider::ProviderError;

/// Submission pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStep {
    UpsertTeam,
    UpsertAccount,
}

impl std::fmt::Display for SubmissionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UpsertTeam => "upsert team",
            Self::UpsertAccount => "upsert account",
        };
        f.write_str(name)
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Inbound credential rejected
    #[error("{0}")]
    Unauthenticated(String),

    /// Upstream envelope is structurally wrong (missing container, inconsistent paging)
    #[error("{}", upstream_protocol_message(*page, detail))]
    UpstreamProtocol { page: Option<u32>, detail: String },

    /// A downstream submission step failed
    #[error("Submission failed at {step}: {detail}")]
    Submission { step: SubmissionStep, detail: String },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

fn upstream_protocol_message(page: Option<u32>, detail: &str) -> String {
    match page {
        Some(page) => format!("Invalid response structure on page {page}: {detail}"),
        None => format!("Invalid response structure: {detail}"),
    }
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected credentials, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthenticated(_) | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }

    /// Attach a page number to a provider-level protocol failure.
    ///
    /// A missing container or an unparseable envelope becomes
    /// [`CoreError::UpstreamProtocol`]; every other provider error is kept.
    #[must_use]
    pub fn from_provider_on_page(err: ProviderError, page: u32) -> Self {
        if err.is_protocol_error() {
            Self::UpstreamProtocol {
                page: Some(page),
                detail: err.to_string(),
            }
        } else {
            Self::Provider(err)
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
