use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Credentials for the registrar XML API.
///
/// The API identifies the caller by the user/key/client-IP triple; the
/// client IP must be whitelisted on the registrar side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarCredentials {
    /// API user (also sent as `UserName`).
    pub api_user: String,
    /// API key.
    pub api_key: String,
    /// Whitelisted client IP.
    pub client_ip: String,
}

/// Credentials for the hosting panel usage API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCredentials {
    /// Host (IP or name) of the panel; the API listens on port 2087.
    pub host: String,
    /// Root API token.
    pub api_key: String,
}

// ============ Domains ============

/// A registered domain as reported by the registrar.
///
/// Built by the provider's total parsing function: booleans are coerced from
/// the upstream `"true"`/`"false"` strings and dates are normalized from
/// `MM/DD/YYYY`. A date that is absent or unreadable is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Fully qualified domain name.
    pub name: String,
    /// Whether auto-renew is enabled.
    pub auto_renew: bool,
    /// Registration date.
    pub created_date: Option<NaiveDate>,
    /// Expiry date.
    pub expires_date: Option<NaiveDate>,
    /// Whether the registration has expired.
    pub is_expired: bool,
    /// Whether the registrar lock is on.
    pub is_locked: bool,
    /// Whether the registrar's own DNS serves the domain.
    pub is_managed_dns: bool,
    /// Owning registrar user.
    pub owner_user: String,
}

/// One page of the domain list.
#[derive(Debug, Clone, Default)]
pub struct DomainPage {
    /// Page number this response answers (1-indexed).
    pub page: u32,
    /// `TotalItems` from the paging block, `None` when the block is absent.
    pub total_items: Option<u32>,
    /// Records on this page, in upstream order.
    pub domains: Vec<DomainRecord>,
}

// ============ Balances ============

/// Account balance block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    /// ISO currency code.
    pub currency: String,
    /// Balance available for purchases.
    pub available_balance: f64,
    /// Total account balance.
    pub account_balance: f64,
    /// Earned (affiliate) amount.
    pub earned_amount: f64,
    /// Amount that can be withdrawn.
    pub withdrawable_amount: f64,
    /// Funds reserved for upcoming auto-renewals.
    pub funds_required_for_auto_renew: f64,
}

// ============ DNS hosts ============

/// A DNS host record of a registrar-managed domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    /// Host name (`@`, `www`, ...).
    pub name: String,
    /// Record type (`A`, `CNAME`, `MX`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub address: String,
    /// MX preference, for MX records.
    pub mx_pref: Option<u16>,
    /// TTL in seconds.
    pub ttl: Option<u32>,
    /// Whether the record is active.
    pub is_active: bool,
}

/// A DNS host record to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecordInput {
    /// Host name (`@`, `www`, ...).
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub address: String,
    /// MX preference, for MX records.
    #[serde(default)]
    pub mx_pref: Option<u16>,
    /// TTL in seconds.
    #[serde(default)]
    pub ttl: Option<u32>,
}

/// Result of replacing a domain's host records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetHostsResult {
    /// Domain the registrar reports as updated.
    pub domain: String,
    /// Registrar's success flag.
    pub success: bool,
}

// ============ Usage ============

/// Opaque usage payload owned by the hosting panel; passed through unparsed.
pub type UsageSnapshot = serde_json::Value;
