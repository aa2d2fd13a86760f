//! Downstream submission payloads and outcome

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DomainRecord, UsageSnapshot};

/// 下游服务器生成的标识符
///
/// Kept as the raw JSON scalar so it is forwarded with its original type
/// (the server may answer with a number or a string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteId(Value);

impl RemoteId {
    /// Read `field` from a response body. Absent, `null`, empty-string and
    /// non-scalar values are rejected.
    pub fn from_field(body: &Value, field: &str) -> Option<Self> {
        match body.get(field)? {
            Value::Number(n) => Some(Self(Value::Number(n.clone()))),
            Value::String(s) if !s.trim().is_empty() => Some(Self(Value::String(s.clone()))),
            _ => None,
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl std::fmt::Display for RemoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl From<u64> for RemoteId {
    fn from(id: u64) -> Self {
        Self(Value::from(id))
    }
}

impl From<&str> for RemoteId {
    fn from(id: &str) -> Self {
        Self(Value::from(id))
    }
}

/// 提交流水线中前两步生成的标识符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionContext {
    pub team_id: RemoteId,
    pub account_id: RemoteId,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// All steps succeeded (step 3 is skipped when there are no domains).
    #[serde(rename_all = "camelCase")]
    Completed {
        team_id: RemoteId,
        account_id: RemoteId,
        domains_submitted: usize,
    },
    /// Team and account were upserted but the domain batch failed.
    #[serde(rename_all = "camelCase")]
    Partial {
        team_id: RemoteId,
        account_id: RemoteId,
        domains_attempted: usize,
        error: String,
    },
}

impl SubmissionOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

// ============ Wire payloads ============

/// `POST /api/team/update-team`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPayload {
    pub name: String,
}

/// `POST /api/team/update-account`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountPayload {
    pub server_name: String,
    pub hosting_price: f64,
    pub team_id: RemoteId,
    #[serde(rename = "availableBalance")]
    pub available_balance: f64,
    #[serde(rename = "fundsRequiredForAutoRenew")]
    pub funds_required_for_auto_renew: f64,
    pub client_ip: String,
    pub bandwidth: Option<UsageSnapshot>,
}

/// One element of the domain batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainWireRecord {
    pub account_id: RemoteId,
    pub name: String,
    pub auto_renew: bool,
    /// `YYYY-MM-DD`
    pub created: Option<NaiveDate>,
    /// `YYYY-MM-DD`
    pub expires: Option<NaiveDate>,
    pub is_expired: bool,
    pub is_locked: bool,
    #[serde(rename = "IsOurDNS")]
    pub is_our_dns: bool,
    pub user: String,
}

impl DomainWireRecord {
    pub fn from_domain(domain: &DomainRecord, account_id: &RemoteId) -> Self {
        Self {
            account_id: account_id.clone(),
            name: domain.name.clone(),
            auto_renew: domain.auto_renew,
            created: domain.created_date,
            expires: domain.expires_date,
            is_expired: domain.is_expired,
            is_locked: domain.is_locked,
            is_our_dns: domain.is_managed_dns,
            user: domain.owner_user.clone(),
        }
    }
}

/// `POST /api/domains/array`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainBatchPayload {
    #[serde(rename = "accountId")]
    pub account_id: RemoteId,
    pub domains: Vec<DomainWireRecord>,
}
