//! 域名输入规范化

use crate::error::{CoreError, CoreResult};

/// A domain split at its first dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDomain {
    /// Second-level label (`example` in `example.co.uk`).
    pub sld: String,
    /// Everything after the first dot (`co.uk`).
    pub tld: String,
}

impl SplitDomain {
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

/// Normalize user input into SLD/TLD.
///
/// Trims whitespace, strips an `http://` or `https://` prefix, drops any
/// path, and removes a trailing dot.
pub fn split_domain(input: &str) -> CoreResult<SplitDomain> {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches('.');

    let invalid = || {
        CoreError::ValidationError("Invalid domain. Expected format: example.com".to_string())
    };

    let (sld, tld) = host.split_once('.').ok_or_else(invalid)?;
    if sld.is_empty() || tld.is_empty() {
        return Err(invalid());
    }

    Ok(SplitDomain {
        sld: sld.to_string(),
        tld: tld.to_string(),
    })
}
