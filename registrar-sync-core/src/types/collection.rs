use serde::{Deserialize, Serialize};

use super::{BalanceSnapshot, DomainRecord};

/// 采集状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Ok,
    Error,
}

/// 一次采集的结果
///
/// Built fresh per run. When `status` is `Error`, `domains` is empty and
/// `balances` is `None`: a failed collection never carries a partial list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResult {
    pub domains: Vec<DomainRecord>,
    pub balances: Option<BalanceSnapshot>,
    pub status: CollectionStatus,
    pub message: Option<String>,
}

impl CollectionResult {
    pub fn ok(domains: Vec<DomainRecord>, balances: BalanceSnapshot) -> Self {
        Self {
            domains,
            balances: Some(balances),
            status: CollectionStatus::Ok,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            domains: Vec::new(),
            balances: None,
            status: CollectionStatus::Error,
            message: Some(message.into()),
        }
    }

    /// Stand-in used when collection is switched off.
    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
            balances: None,
            status: CollectionStatus::Ok,
            message: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CollectionStatus::Ok
    }
}
